//! Element handler trait definition.

use super::types::{Attr, Fact, Tag};
use crate::error::Result;
use crate::xml::Element;

/// Trait for construct handlers.
///
/// A handler is the pair of registries for one construct: which attributes
/// and which Atom child elements it understands, and whether the node's own
/// leaf text is meaningful. Returning `Ok(None)` ignores the attribute or
/// child. Errors from scalar parsing propagate out of the dispatcher as is.
pub trait ElementHandler {
    /// Construct name, used in diagnostics.
    fn construct(&self) -> &'static str;

    /// Whether the node's leaf text becomes a [`Fact::LeafText`].
    fn accepts_text(&self) -> bool {
        false
    }

    /// Turn a recognised attribute into a fact.
    fn handle_attribute(&self, _attr: Attr, _value: &str) -> Result<Option<Fact>> {
        Ok(None)
    }

    /// Turn a recognised Atom child element into a fact.
    fn handle_child(&self, _tag: Tag, _child: &Element) -> Result<Option<Fact>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestHandler;

    impl ElementHandler for TestHandler {
        fn construct(&self) -> &'static str {
            "test"
        }
    }

    #[test]
    fn test_handler_defaults_ignore_everything() {
        let handler = TestHandler;
        assert!(!handler.accepts_text());
        assert_eq!(handler.handle_attribute(Attr::Href, "x").unwrap(), None);
        assert_eq!(
            handler
                .handle_child(Tag::Title, &Element::atom("title"))
                .unwrap(),
            None
        );
    }
}
