//! Feed builder.

use super::{
    make_author, make_category, make_entry, make_generator, make_link, set_first, validate_links,
};
use crate::error::{AtomError, Result};
use crate::registry::{Fact, Facts};
use crate::types::Feed;

/// Build a [`Feed`].
///
/// Feed metadata is reduced first; entries are built afterwards with the
/// feed's authors available for inheritance.
pub fn make_feed(facts: Facts) -> Result<Feed> {
    let mut authors = Vec::new();
    let mut categories = Vec::new();
    let mut contributors = Vec::new();
    let mut links = Vec::new();
    let mut entry_facts = Vec::new();
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
            Fact::Entry(f) => entry_facts.push(f),
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

    let id = id.ok_or_else(|| AtomError::missing_element("id", "feed"))?;
    let title = title.ok_or_else(|| AtomError::missing_element("title", "feed"))?;
    let updated = updated.ok_or_else(|| AtomError::missing_element("updated", "feed"))?;
    let links = validate_links(links)?;

    let entries = entry_facts
        .into_iter()
        .map(|f| make_entry(f, &authors))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(id = %id, entries = entries.len(), "Built feed");

    Ok(Feed {
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
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::dispatch;
    use crate::registry::handlers::FeedHandler;
    use crate::types::{Author, NonEmpty};
    use crate::xml::parse_document;

    fn feed_facts(body: &str) -> Facts {
        let xml = format!(r#"<feed xmlns="http://www.w3.org/2005/Atom">{body}</feed>"#);
        dispatch(&parse_document(&xml).unwrap(), &FeedHandler).unwrap()
    }

    const HEAD: &str =
        "<id>urn:f</id><title>Feed</title><updated>2003-12-13T18:30:02Z</updated>";

    #[test]
    fn test_make_feed_cascades_authors() {
        let facts = feed_facts(&format!(
            "{HEAD}<author><name>Alice</name></author>
             <entry><id>urn:e</id><title>E</title><updated>2003-12-13T18:30:02Z</updated></entry>"
        ));
        let feed = make_feed(facts).unwrap();
        assert_eq!(feed.entries.len(), 1);
        assert_eq!(feed.entries[0].authors, NonEmpty::new(Author::named("Alice")));
    }

    #[test]
    fn test_make_feed_authors_after_entries_still_inherited() {
        let facts = feed_facts(&format!(
            "{HEAD}<entry><id>urn:e</id><title>E</title><updated>2003-12-13T18:30:02Z</updated></entry>
             <author><name>Late</name></author>"
        ));
        let feed = make_feed(facts).unwrap();
        assert_eq!(feed.entries[0].authors.head.name, "Late");
    }

    #[test]
    fn test_make_feed_without_entries_needs_no_author() {
        let feed = make_feed(feed_facts(HEAD)).unwrap();
        assert!(feed.authors.is_empty());
        assert!(feed.entries.is_empty());
    }

    #[test]
    fn test_make_feed_missing_title() {
        let facts = feed_facts("<id>urn:f</id><updated>2003-12-13T18:30:02Z</updated>");
        let err = make_feed(facts).unwrap_err();
        assert_eq!(err.to_string(), "Missing required XML element: <title> in <feed>");
    }

    #[test]
    fn test_make_feed_duplicate_alternate_links() {
        let facts = feed_facts(&format!(
            r#"{HEAD}<link href="/a" hreflang="en"/><link href="/b" hreflang="en"/>"#
        ));
        assert!(matches!(
            make_feed(facts),
            Err(AtomError::DuplicateAlternateLink { .. })
        ));
    }

    #[test]
    fn test_make_feed_entry_error_propagates() {
        let facts = feed_facts(&format!(
            "{HEAD}<author><name>a</name></author><entry><title>no id</title></entry>"
        ));
        assert!(matches!(
            make_feed(facts),
            Err(AtomError::MissingElement { ref context, .. }) if context == "entry"
        ));
    }
}
