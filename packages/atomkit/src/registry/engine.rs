//! Dispatcher that turns an element into its fact list.

use super::handler::ElementHandler;
use super::types::{Attr, Fact, Facts, Tag};
use crate::config::is_atom_namespace;
use crate::error::Result;
use crate::xml::{get_tag_name, leaf_text, Element};

/// Dispatch an element's attributes and children to a handler.
///
/// Facts are produced in this order:
/// 1. recognised unqualified attributes, in document order;
/// 2. recognised children in the Atom namespace, in document order;
/// 3. the leaf text, when the handler accepts it and it is not blank.
///
/// Elements in other namespaces are extension content and are skipped.
/// Handler errors propagate unchanged.
///
/// # Errors
/// Returns the first error raised by a handler.
pub fn dispatch(element: &Element, handler: &dyn ElementHandler) -> Result<Facts> {
    let mut facts = Facts::new();

    for attr in &element.attributes {
        if attr.name.namespace.is_some() {
            continue;
        }
        let Some(name) = Attr::from_local_name(&attr.name.local) else {
            continue;
        };
        if let Some(fact) = handler.handle_attribute(name, &attr.value)? {
            facts.push(fact);
        }
    }

    for child in element.elements() {
        if !is_atom_namespace(child.name.namespace.as_deref()) {
            tracing::debug!(
                construct = handler.construct(),
                namespace = child.name.namespace.as_deref().unwrap_or(""),
                tag = %get_tag_name(child),
                "Skipping extension element"
            );
            continue;
        }
        let Some(tag) = Tag::from_local_name(get_tag_name(child)) else {
            tracing::debug!(
                construct = handler.construct(),
                tag = %get_tag_name(child),
                "Skipping unknown Atom element"
            );
            continue;
        };
        if let Some(fact) = handler.handle_child(tag, child)? {
            facts.push(fact);
        }
    }

    if handler.accepts_text() {
        if let Some(text) = leaf_text(element) {
            facts.push(Fact::LeafText(text));
        }
    }

    Ok(facts)
}
