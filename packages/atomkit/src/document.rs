//! Document-level entry points that tie the dispatcher, builders and
//! serializer together.

use crate::build::{make_entry, make_feed};
use crate::error::{AtomError, Result};
use crate::registry::handlers::{EntryHandler, FeedHandler};
use crate::registry::{dispatch, ElementHandler, Facts};
use crate::serialize;
use crate::types::{Entry, Feed};
use crate::xml::{get_tag_name, parse_document, write_document, Element};

/// Fail unless `root` is `atom:<expected>`.
fn expect_root(root: &Element, expected: &str) -> Result<()> {
    if root.is_atom(expected) {
        return Ok(());
    }
    let found = match root.name.namespace.as_deref() {
        Some(namespace) => format!("{{{namespace}}}{}", get_tag_name(root)),
        None => get_tag_name(root).to_string(),
    };
    Err(AtomError::UnexpectedRoot {
        expected: expected.to_string(),
        found,
    })
}

/// Strictly parse an `atom:feed` document.
///
/// Every cardinality, uniqueness and author rule is enforced; the first
/// violation in document order is returned.
///
/// # Examples
/// ```
/// use atomkit::{parse, xml::parse_document};
///
/// let root = parse_document(r#"<feed xmlns="http://www.w3.org/2005/Atom">
///   <id>urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6</id>
///   <title>Example Feed</title>
///   <updated>2003-12-13T18:30:02Z</updated>
/// </feed>"#).unwrap();
/// let feed = parse(&root).unwrap();
/// assert!(feed.entries.is_empty());
/// ```
pub fn parse(document: &Element) -> Result<Feed> {
    expect_root(document, "feed")?;
    let facts = dispatch(document, &FeedHandler)?;
    let feed = make_feed(facts)?;
    tracing::debug!(entries = feed.entries.len(), "Parsed feed");
    Ok(feed)
}

/// Strictly parse a standalone `atom:entry` document.
///
/// There is no feed to inherit authors from, so the entry must declare
/// them itself or through its source.
pub fn parse_entry(document: &Element) -> Result<Entry> {
    expect_root(document, "entry")?;
    let facts = dispatch(document, &EntryHandler)?;
    make_entry(facts, &[])
}

/// Permissive parse of a feed or entry document.
///
/// Returns the dispatched facts of the root without applying any
/// cardinality, uniqueness or author rule. Scalar parse failures still
/// propagate.
pub fn parse_unsafe(document: &Element) -> Result<Facts> {
    let handler: &dyn ElementHandler = if document.is_atom("entry") {
        &EntryHandler
    } else {
        &FeedHandler
    };
    dispatch(document, handler)
}

/// [`parse`] from XML text.
pub fn parse_str(xml: &str) -> Result<Feed> {
    parse(&parse_document(xml)?)
}

/// [`parse_entry`] from XML text.
pub fn parse_entry_str(xml: &str) -> Result<Entry> {
    parse_entry(&parse_document(xml)?)
}

/// [`parse_unsafe`] from XML text.
pub fn parse_unsafe_str(xml: &str) -> Result<Facts> {
    parse_unsafe(&parse_document(xml)?)
}

/// Serialize a feed to an element tree.
#[must_use]
pub fn to_element(feed: &Feed) -> Element {
    serialize::feed_to_element(feed)
}

/// Serialize an entry to an element tree.
#[must_use]
pub fn entry_to_element(entry: &Entry) -> Element {
    serialize::entry_to_element(entry)
}

/// Serialize a feed to XML text, with declaration.
pub fn to_string(feed: &Feed) -> Result<String> {
    write_document(&to_element(feed))
}

/// Serialize an entry document to XML text, with declaration.
pub fn entry_to_string(entry: &Entry) -> Result<String> {
    write_document(&entry_to_element(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Fact;
    use crate::types::{Author, NonEmpty};

    const FEED: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom">
        <id>urn:f</id><title>Feed</title><updated>2003-12-13T18:30:02Z</updated>
        <author><name>Alice</name></author>
        <entry><id>urn:e</id><title>E</title><updated>2003-12-13T18:30:02Z</updated></entry>
    </feed>"#;

    #[test]
    fn test_parse_str() {
        let feed = parse_str(FEED).unwrap();
        assert_eq!(feed.entries[0].authors, NonEmpty::new(Author::named("Alice")));
    }

    #[test]
    fn test_parse_rejects_wrong_root() {
        let err = parse_str(r#"<rss version="2.0"/>"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected root element <feed> in the Atom namespace, found <rss>"
        );
    }

    #[test]
    fn test_parse_rejects_feed_outside_atom_namespace() {
        let err = parse_str("<feed/>").unwrap_err();
        assert!(matches!(err, AtomError::UnexpectedRoot { .. }));
    }

    #[test]
    fn test_parse_entry_document() {
        let entry = parse_entry_str(
            r#"<entry xmlns="http://www.w3.org/2005/Atom">
                <id>urn:e</id><title>E</title><updated>2003-12-13T18:30:02Z</updated>
                <author><name>Solo</name></author>
            </entry>"#,
        )
        .unwrap();
        assert_eq!(entry.authors.head.name, "Solo");
    }

    #[test]
    fn test_parse_unsafe_skips_validation() {
        let facts = parse_unsafe_str(
            r#"<feed xmlns="http://www.w3.org/2005/Atom">
                <entry><title>no id, no author</title></entry>
                <link href="/a"/><link href="/b"/>
            </feed>"#,
        )
        .unwrap();
        assert_eq!(facts.count("link"), 2);
        assert_eq!(facts.entries().count(), 1);
        assert!(parse_str(
            r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry/></feed>"#
        )
        .is_err());
    }

    #[test]
    fn test_parse_unsafe_entry_root() {
        let facts = parse_unsafe_str(
            r#"<entry xmlns="http://www.w3.org/2005/Atom"><published>2003-12-13T18:30:02Z</published></entry>"#,
        )
        .unwrap();
        assert!(matches!(facts.iter().next(), Some(Fact::Published(_))));
    }

    #[test]
    fn test_to_string_round_trip_keeps_attribute_newlines() {
        let xml = FEED.replace(
            "<author>",
            r#"<link href="/a" title="a&#10;b&#9;c"/><author>"#,
        );
        let feed = parse_str(&xml).unwrap();
        assert_eq!(feed.links[0].title.as_deref(), Some("a\nb\tc"));
        assert_eq!(parse_str(&to_string(&feed).unwrap()).unwrap(), feed);
    }

    #[test]
    fn test_to_string_round_trip() {
        let feed = parse_str(FEED).unwrap();
        let xml = to_string(&feed).unwrap();
        assert_eq!(parse_str(&xml).unwrap(), feed);
    }
}
