//! Author inheritance (RFC 4287 §4.1.2).

use crate::error::{AtomError, Result};
use crate::types::{Author, NonEmpty};

/// Resolve the authors of an entry or source.
///
/// Declared authors win. Without any, the inherited authors are used: for
/// an entry, those of its source or else its feed; for a source, those of
/// its entry or else the feed.
///
/// # Errors
/// Returns [`AtomError::UnresolvableAuthor`] when both lists are empty.
pub fn resolve_authors(
    declared: Vec<Author>,
    inherited: &[Author],
    context: &str,
) -> Result<NonEmpty<Author>> {
    if let Some(authors) = NonEmpty::from_vec(declared) {
        return Ok(authors);
    }
    NonEmpty::from_vec(inherited.to_vec()).ok_or_else(|| AtomError::UnresolvableAuthor {
        context: context.to_string(),
    })
}
