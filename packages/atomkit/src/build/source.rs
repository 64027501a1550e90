//! Source builder.

use super::{
    make_author, make_category, make_generator, make_link, resolve_authors, set_first,
    validate_links,
};
use crate::error::{AtomError, Result};
use crate::registry::{Fact, Facts};
use crate::types::{Author, NonEmpty, Source};

/// Build a [`Source`].
///
/// `inherited` holds the authors to fall back on when the source declares
/// none. The source needs `id`, `title` and at least one link.
pub fn make_source(facts: Facts, inherited: &[Author]) -> Result<Source> {
    let mut authors = Vec::new();
    let mut categories = Vec::new();
    let mut contributors = Vec::new();
    let mut links = Vec::new();
    let mut generator = None;
    let mut icon = None;
    let mut id = None;
    let mut logo = None;
    let mut rights = None;
    let mut subtitle = None;
    let mut title = None;
    let mut updated = None;

    for fact in facts {
        match fact {
            Fact::Author(f) => authors.push(make_author(f)),
            Fact::Category(f) => categories.push(make_category(f)?),
            Fact::Contributor(f) => contributors.push(make_author(f)),
            Fact::Generator(f) => set_first(&mut generator, make_generator(f)),
            Fact::Icon(v) => set_first(&mut icon, v),
            Fact::Id(v) => set_first(&mut id, v),
            Fact::Link(f) => links.push(make_link(f)?),
            Fact::Logo(v) => set_first(&mut logo, v),
            Fact::Rights(v) => set_first(&mut rights, v),
            Fact::Subtitle(v) => set_first(&mut subtitle, v),
            Fact::Title(v) => set_first(&mut title, v),
            Fact::Updated(v) => set_first(&mut updated, v),
            _ => {}
        }
    }

    let id = id.ok_or_else(|| AtomError::missing_element("id", "source"))?;
    let title = title.ok_or_else(|| AtomError::missing_element("title", "source"))?;
    let links = NonEmpty::from_vec(validate_links(links)?)
        .ok_or_else(|| AtomError::missing_element("link", "source"))?;
    let authors = resolve_authors(authors, inherited, "source")?;

    Ok(Source {
        authors,
        categories,
        contributors,
        generator,
        icon,
        id,
        links,
        logo,
        rights,
        subtitle,
        title,
        updated,
    })
}
