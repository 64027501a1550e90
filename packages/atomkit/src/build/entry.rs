//! Entry builder.

use super::{
    make_author, make_category, make_link, make_source, resolve_authors, set_first,
    validate_links,
};
use crate::error::{AtomError, Result};
use crate::registry::{Fact, Facts};
use crate::types::{Author, Entry};

/// Build an [`Entry`].
///
/// `feed_authors` are the authors of the containing feed, empty for a
/// standalone entry document. The entry's sources are built first, with
/// the entry's own authors (or else the feed's) as their fallback; an
/// entry without authors then takes those of its first source, or else
/// the feed's.
pub fn make_entry(facts: Facts, feed_authors: &[Author]) -> Result<Entry> {
    let mut authors = Vec::new();
    let mut categories = Vec::new();
    let mut contributors = Vec::new();
    let mut links = Vec::new();
    let mut source_facts = Vec::new();
    let mut content = None;
    let mut id = None;
    let mut published = None;
    let mut rights = None;
    let mut summary = None;
    let mut title = None;
    let mut updated = None;

    for fact in facts {
        match fact {
            Fact::Author(f) => authors.push(make_author(f)),
            Fact::Category(f) => categories.push(make_category(f)?),
            Fact::Content(v) => set_first(&mut content, v),
            Fact::Contributor(f) => contributors.push(make_author(f)),
            Fact::Id(v) => set_first(&mut id, v),
            Fact::Link(f) => links.push(make_link(f)?),
            Fact::Published(v) => set_first(&mut published, v),
            Fact::Rights(v) => set_first(&mut rights, v),
            Fact::Source(f) => source_facts.push(f),
            Fact::Summary(v) => set_first(&mut summary, v),
            Fact::Title(v) => set_first(&mut title, v),
            Fact::Updated(v) => set_first(&mut updated, v),
            _ => {}
        }
    }

    let id = id.ok_or_else(|| AtomError::missing_element("id", "entry"))?;
    let title = title.ok_or_else(|| AtomError::missing_element("title", "entry"))?;
    let updated = updated.ok_or_else(|| AtomError::missing_element("updated", "entry"))?;

    let source_fallback = if authors.is_empty() {
        feed_authors
    } else {
        authors.as_slice()
    };
    let sources = source_facts
        .into_iter()
        .map(|f| make_source(f, source_fallback))
        .collect::<Result<Vec<_>>>()?;

    let links = validate_links(links)?;

    let inherited: Vec<Author> = match sources.first() {
        Some(source) => source.authors.iter().cloned().collect(),
        None => feed_authors.to_vec(),
    };
    let authors = resolve_authors(authors, &inherited, "entry")?;

    tracing::debug!(id = %id, authors = authors.len(), "Built entry");

    Ok(Entry {
        authors,
        categories,
        content,
        contributors,
        id,
        links,
        published,
        rights,
        sources,
        summary,
        title,
        updated,
    })
}
