//! XML utility functions for navigating owned element trees.

use super::tree::{Element, XmlNode};

/// Get the tag name without namespace.
///
/// # Examples
/// ```
/// use atomkit::xml::{get_tag_name, Element};
///
/// assert_eq!(get_tag_name(&Element::atom("entry")), "entry");
/// ```
#[must_use]
pub fn get_tag_name(element: &Element) -> &str {
    &element.name.local
}

/// Get the leaf text of an element, trimmed.
///
/// Concatenates the direct text children. Returns `None` when there is no
/// text or the text is whitespace only.
///
/// # Examples
/// ```
/// use atomkit::xml::{leaf_text, Element};
///
/// let name = Element::atom("name").with_text("  Alice ");
/// assert_eq!(leaf_text(&name), Some("Alice".to_string()));
/// assert_eq!(leaf_text(&Element::atom("name").with_text(" \n ")), None);
/// ```
#[must_use]
pub fn leaf_text(element: &Element) -> Option<String> {
    let text = element.text();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Get the children that are not whitespace-only text.
#[must_use]
pub fn significant_children(nodes: &[XmlNode]) -> Vec<&XmlNode> {
    nodes.iter().filter(|node| !node.is_whitespace()).collect()
}
