//! Handlers for container elements: `atom:feed`, `atom:entry`, `atom:source`.
//!
//! Text and content constructs and leaf URIs are resolved while
//! dispatching. Persons, categories, generators, links, sources and entries
//! stay as nested fact lists: their cardinality and inheritance rules are
//! applied later by the builders.

use super::leaf::{CategoryHandler, GeneratorHandler, LeafHandler, LinkHandler};
use super::person::PersonHandler;
use crate::build::{make_icon, make_id, make_logo};
use crate::error::Result;
use crate::registry::engine::dispatch;
use crate::registry::handler::ElementHandler;
use crate::registry::types::{Fact, Tag};
use crate::scalar::parse_date;
use crate::text::{resolve_content, resolve_text_construct};
use crate::xml::{leaf_text, Element};

/// Children shared by feed and source metadata.
fn metadata_child(tag: Tag, child: &Element) -> Result<Option<Fact>> {
    let fact = match tag {
        Tag::Author => Fact::Author(dispatch(child, &PersonHandler::AUTHOR)?),
        Tag::Category => Fact::Category(dispatch(child, &CategoryHandler)?),
        Tag::Contributor => Fact::Contributor(dispatch(child, &PersonHandler::CONTRIBUTOR)?),
        Tag::Generator => Fact::Generator(dispatch(child, &GeneratorHandler)?),
        Tag::Icon => Fact::Icon(make_icon(dispatch(child, &LeafHandler::ICON)?)?),
        Tag::Id => Fact::Id(make_id(dispatch(child, &LeafHandler::ID)?)?),
        Tag::Link => Fact::Link(dispatch(child, &LinkHandler)?),
        Tag::Logo => Fact::Logo(make_logo(dispatch(child, &LeafHandler::LOGO)?)?),
        Tag::Rights => Fact::Rights(resolve_text_construct(child)?),
        Tag::Subtitle => Fact::Subtitle(resolve_text_construct(child)?),
        Tag::Title => Fact::Title(resolve_text_construct(child)?),
        Tag::Updated => Fact::Updated(parse_date(&leaf_text(child).unwrap_or_default())?),
        _ => return Ok(None),
    };
    Ok(Some(fact))
}

/// Handler for `<feed>`.
pub struct FeedHandler;

impl ElementHandler for FeedHandler {
    fn construct(&self) -> &'static str {
        "feed"
    }

    fn handle_child(&self, tag: Tag, child: &Element) -> Result<Option<Fact>> {
        match tag {
            Tag::Entry => Ok(Some(Fact::Entry(dispatch(child, &EntryHandler)?))),
            _ => metadata_child(tag, child),
        }
    }
}

/// Handler for `<source>`.
pub struct SourceHandler;

impl ElementHandler for SourceHandler {
    fn construct(&self) -> &'static str {
        "source"
    }

    fn handle_child(&self, tag: Tag, child: &Element) -> Result<Option<Fact>> {
        metadata_child(tag, child)
    }
}

/// Handler for `<entry>`.
pub struct EntryHandler;

impl ElementHandler for EntryHandler {
    fn construct(&self) -> &'static str {
        "entry"
    }

    fn handle_child(&self, tag: Tag, child: &Element) -> Result<Option<Fact>> {
        let fact = match tag {
            Tag::Content => Fact::Content(resolve_content(child)?),
            Tag::Published => Fact::Published(parse_date(&leaf_text(child).unwrap_or_default())?),
            Tag::Source => Fact::Source(dispatch(child, &SourceHandler)?),
            Tag::Summary => Fact::Summary(resolve_text_construct(child)?),
            // Feed-level metadata has no meaning on an entry.
            Tag::Generator | Tag::Icon | Tag::Logo | Tag::Subtitle => return Ok(None),
            _ => return metadata_child(tag, child),
        };
        Ok(Some(fact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtomError;
    use crate::types::TextConstruct;
    use crate::xml::parse_document;

    #[test]
    fn test_feed_defers_entries_and_people() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
            <title>Example Feed</title>
            <author><name>John Doe</name></author>
            <entry><id>urn:e1</id></entry>
            <entry><id>urn:e2</id></entry>
        </feed>"#;
        let root = parse_document(xml).unwrap();
        let facts = dispatch(&root, &FeedHandler).unwrap();

        assert_eq!(facts.count("entry"), 2);
        assert_eq!(facts.count("author"), 1);
        assert_eq!(
            facts.title(),
            Some(&TextConstruct::Text("Example Feed".to_string()))
        );
    }

    #[test]
    fn test_entry_ignores_feed_only_children() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom">
            <subtitle>nope</subtitle><logo>/logo.png</logo><summary>yes</summary>
        </entry>"#;
        let root = parse_document(xml).unwrap();
        let facts = dispatch(&root, &EntryHandler).unwrap();

        assert_eq!(facts.len(), 1);
        assert_eq!(facts.count("summary"), 1);
    }

    #[test]
    fn test_source_does_not_recognise_entries() {
        let xml = r#"<source xmlns="http://www.w3.org/2005/Atom"><entry/><id>urn:s</id></source>"#;
        let root = parse_document(xml).unwrap();
        let facts = dispatch(&root, &SourceHandler).unwrap();
        assert_eq!(facts.count("entry"), 0);
        assert_eq!(facts.count("id"), 1);
    }

    #[test]
    fn test_invalid_updated_propagates() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom"><updated>soon</updated></entry>"#;
        let root = parse_document(xml).unwrap();
        let err = dispatch(&root, &EntryHandler).unwrap_err();
        assert!(matches!(err, AtomError::InvalidDate { .. }));
    }
}
