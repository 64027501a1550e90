//! Builders for categories, generators, links and leaf URI constructs.

use crate::error::{AtomError, Result};
use crate::registry::{Fact, Facts};
use crate::scalar::Uri;
use crate::types::{Category, Generator, Icon, Id, Link, Logo};

/// Build a [`Category`]. `term` is required.
pub fn make_category(facts: Facts) -> Result<Category> {
    let mut term = None;
    let mut scheme = None;
    let mut label = None;

    for fact in facts {
        match fact {
            Fact::Term(value) => super::set_first(&mut term, value),
            Fact::Scheme(value) => super::set_first(&mut scheme, value),
            Fact::Label(value) => super::set_first(&mut label, value),
            _ => {}
        }
    }

    Ok(Category {
        term: term.ok_or_else(|| AtomError::missing_attribute("term", "category"))?,
        scheme,
        label,
    })
}

/// Build a [`Generator`]. An empty element yields an empty name.
#[must_use]
pub fn make_generator(facts: Facts) -> Generator {
    let mut content = None;
    let mut version = None;
    let mut uri = None;

    for fact in facts {
        match fact {
            Fact::LeafText(value) => super::set_first(&mut content, value),
            Fact::Version(value) => super::set_first(&mut version, value),
            Fact::Uri(value) => super::set_first(&mut uri, value),
            _ => {}
        }
    }

    Generator {
        content: content.unwrap_or_default(),
        version,
        uri,
    }
}

/// Build a [`Link`]. `href` is required, `rel` defaults to alternate.
pub fn make_link(facts: Facts) -> Result<Link> {
    let mut href = None;
    let mut rel = None;
    let mut media_type = None;
    let mut hreflang = None;
    let mut title = None;
    let mut length = None;

    for fact in facts {
        match fact {
            Fact::Href(value) => super::set_first(&mut href, value),
            Fact::Rel(value) => super::set_first(&mut rel, value),
            Fact::MediaType(value) => super::set_first(&mut media_type, value),
            Fact::Hreflang(value) => super::set_first(&mut hreflang, value),
            Fact::LinkTitle(value) => super::set_first(&mut title, value),
            Fact::Length(value) => super::set_first(&mut length, value),
            _ => {}
        }
    }

    Ok(Link {
        href: href.ok_or_else(|| AtomError::missing_attribute("href", "link"))?,
        rel: rel.unwrap_or_default(),
        media_type,
        hreflang,
        title,
        length,
    })
}

/// URI from the leaf text of an `id`, `icon` or `logo` element.
fn leaf_uri(facts: Facts) -> Result<Uri> {
    let text = facts
        .into_iter()
        .find_map(|fact| match fact {
            Fact::LeafText(text) => Some(text),
            _ => None,
        })
        .unwrap_or_default();
    Uri::parse(&text)
}

/// Build an [`Id`].
pub fn make_id(facts: Facts) -> Result<Id> {
    leaf_uri(facts).map(Id)
}

/// Build an [`Icon`].
pub fn make_icon(facts: Facts) -> Result<Icon> {
    leaf_uri(facts).map(Icon)
}

/// Build a [`Logo`].
pub fn make_logo(facts: Facts) -> Result<Logo> {
    leaf_uri(facts).map(Logo)
}
