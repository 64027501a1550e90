//! Person construct builder.

use crate::registry::{Fact, Facts};
use crate::types::Author;

/// Build an [`Author`] (also used for contributors).
///
/// The name comes from the first `name` child. Without one, the element's
/// own text is used, and failing that the empty string.
#[must_use]
pub fn make_author(facts: Facts) -> Author {
    let mut name = None;
    let mut leaf = None;
    let mut uri = None;
    let mut email = None;

    for fact in facts {
        match fact {
            Fact::Name(value) => super::set_first(&mut name, value),
            Fact::LeafText(value) => super::set_first(&mut leaf, value),
            Fact::Uri(value) => super::set_first(&mut uri, value),
            Fact::Email(value) => super::set_first(&mut email, value),
            _ => {}
        }
    }

    let name = name.or_else(|| {
        tracing::warn!(fallback = leaf.as_deref().unwrap_or(""), "Person construct without <name>");
        leaf
    });

    Author {
        name: name.unwrap_or_default(),
        uri,
        email,
    }
}
