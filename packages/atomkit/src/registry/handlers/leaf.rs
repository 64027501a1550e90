//! Handlers for leaf and attribute-only constructs.
//!
//! These handlers never look at child elements: `atom:link` and
//! `atom:category` are described by attributes alone, `atom:generator`
//! by attributes plus text, and the URI constructs (`id`, `icon`, `logo`)
//! by text alone.

use crate::error::Result;
use crate::registry::handler::ElementHandler;
use crate::registry::types::{Attr, Fact};
use crate::scalar::{parse_length, Uri};
use crate::types::Rel;

/// Handler for constructs whose only content is leaf text.
pub struct LeafHandler {
    construct: &'static str,
}

impl LeafHandler {
    /// Handler for `<id>`.
    pub const ID: Self = Self { construct: "id" };

    /// Handler for `<icon>`.
    pub const ICON: Self = Self { construct: "icon" };

    /// Handler for `<logo>`.
    pub const LOGO: Self = Self { construct: "logo" };
}

impl ElementHandler for LeafHandler {
    fn construct(&self) -> &'static str {
        self.construct
    }

    fn accepts_text(&self) -> bool {
        true
    }
}

/// Handler for `<category term="..." scheme="..." label="..."/>`.
pub struct CategoryHandler;

impl ElementHandler for CategoryHandler {
    fn construct(&self) -> &'static str {
        "category"
    }

    fn handle_attribute(&self, attr: Attr, value: &str) -> Result<Option<Fact>> {
        let fact = match attr {
            Attr::Term => Fact::Term(value.to_string()),
            Attr::Scheme => Fact::Scheme(Uri::parse(value)?),
            Attr::Label => Fact::Label(value.to_string()),
            _ => return Ok(None),
        };
        Ok(Some(fact))
    }
}

/// Handler for `<generator uri="..." version="...">Name</generator>`.
pub struct GeneratorHandler;

impl ElementHandler for GeneratorHandler {
    fn construct(&self) -> &'static str {
        "generator"
    }

    fn accepts_text(&self) -> bool {
        true
    }

    fn handle_attribute(&self, attr: Attr, value: &str) -> Result<Option<Fact>> {
        let fact = match attr {
            Attr::Uri => Fact::Uri(Uri::parse(value)?),
            Attr::Version => Fact::Version(value.to_string()),
            _ => return Ok(None),
        };
        Ok(Some(fact))
    }
}

/// Handler for `<link>` elements.
pub struct LinkHandler;

impl ElementHandler for LinkHandler {
    fn construct(&self) -> &'static str {
        "link"
    }

    fn handle_attribute(&self, attr: Attr, value: &str) -> Result<Option<Fact>> {
        let fact = match attr {
            Attr::Href => Fact::Href(Uri::parse(value)?),
            Attr::Rel => Fact::Rel(Rel::parse(value)?),
            Attr::Type => Fact::MediaType(value.to_string()),
            Attr::Hreflang => Fact::Hreflang(value.to_string()),
            Attr::Title => Fact::LinkTitle(value.to_string()),
            Attr::Length => Fact::Length(parse_length(value)?),
            _ => return Ok(None),
        };
        Ok(Some(fact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtomError;
    use crate::registry::{dispatch, Facts};
    use crate::xml::parse_document;

    #[test]
    fn test_link_attributes() {
        let xml = r#"<link xmlns="http://www.w3.org/2005/Atom" rel="enclosure"
            type="audio/mpeg" length="1337" href="http://example.org/audio/ph34r_my_podcast.mp3"
            hreflang="en" title="Podcast" foo="bar"/>"#;
        let root = parse_document(xml).unwrap();
        let facts = dispatch(&root, &LinkHandler).unwrap();

        assert_eq!(facts.len(), 6);
        assert!(facts.iter().any(|f| *f == Fact::Rel(Rel::Enclosure)));
        assert!(facts.iter().any(|f| *f == Fact::Length(1337)));
        assert!(facts.iter().any(|f| *f == Fact::LinkTitle("Podcast".to_string())));
    }

    #[test]
    fn test_link_invalid_length() {
        let xml = r#"<link xmlns="http://www.w3.org/2005/Atom" href="/a" length="big"/>"#;
        let root = parse_document(xml).unwrap();
        let err = dispatch(&root, &LinkHandler).unwrap_err();
        assert!(matches!(err, AtomError::InvalidLength { .. }));
    }

    #[test]
    fn test_category_attributes() {
        let xml = r#"<category xmlns="http://www.w3.org/2005/Atom" term="rust"
            scheme="http://example.org/tags/" label="Rust"/>"#;
        let root = parse_document(xml).unwrap();
        let facts = dispatch(&root, &CategoryHandler).unwrap();

        assert_eq!(
            facts,
            Facts::from(vec![
                Fact::Term("rust".to_string()),
                Fact::Scheme(Uri::parse("http://example.org/tags/").unwrap()),
                Fact::Label("Rust".to_string()),
            ])
        );
    }

    #[test]
    fn test_generator_text_and_attributes() {
        let xml = r#"<generator xmlns="http://www.w3.org/2005/Atom"
            uri="http://www.example.com/" version="1.0">Example Toolkit</generator>"#;
        let root = parse_document(xml).unwrap();
        let facts = dispatch(&root, &GeneratorHandler).unwrap();

        assert_eq!(
            facts,
            Facts::from(vec![
                Fact::Uri(Uri::parse("http://www.example.com/").unwrap()),
                Fact::Version("1.0".to_string()),
                Fact::LeafText("Example Toolkit".to_string()),
            ])
        );
    }

    #[test]
    fn test_leaf_handler_collects_text_only() {
        let xml = r#"<id xmlns="http://www.w3.org/2005/Atom" type="ignored"> urn:x </id>"#;
        let root = parse_document(xml).unwrap();
        let facts = dispatch(&root, &LeafHandler::ID).unwrap();
        assert_eq!(facts, Facts::from(vec![Fact::LeafText("urn:x".to_string())]));
    }
}
