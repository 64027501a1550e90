//! Handler for Person constructs (`atom:author`, `atom:contributor`).

use crate::error::Result;
use crate::registry::handler::ElementHandler;
use crate::registry::types::{Fact, Tag};
use crate::scalar::Uri;
use crate::xml::{leaf_text, Element};

/// Handler for `<author>` and `<contributor>` elements.
///
/// Accepts leaf text so a bare `<author>Name</author>` still yields a name.
pub struct PersonHandler {
    construct: &'static str,
}

impl PersonHandler {
    /// Handler for `<author>`.
    pub const AUTHOR: Self = Self {
        construct: "author",
    };

    /// Handler for `<contributor>`.
    pub const CONTRIBUTOR: Self = Self {
        construct: "contributor",
    };
}

impl ElementHandler for PersonHandler {
    fn construct(&self) -> &'static str {
        self.construct
    }

    fn accepts_text(&self) -> bool {
        true
    }

    fn handle_child(&self, tag: Tag, child: &Element) -> Result<Option<Fact>> {
        let text = leaf_text(child).unwrap_or_default();
        let fact = match tag {
            Tag::Name => Fact::Name(text),
            Tag::Email => Fact::Email(text),
            Tag::Uri => Fact::Uri(Uri::parse(&text)?),
            _ => return Ok(None),
        };
        Ok(Some(fact))
    }
}
