//! Construct builders.
//!
//! Each `make_*` function reduces the [`Facts`](crate::registry::Facts) of
//! one element into a model value in a single pass:
//!
//! - singular fields keep the first matching fact;
//! - repeated fields keep every matching fact, in document order;
//! - required fields that stay empty fail with the missing name and the
//!   construct it was missing from.
//!
//! Containers additionally run [`validate_links`] and [`resolve_authors`].
//! Inherited authors are passed in as plain arguments, outermost first:
//! the feed's authors into each entry, the entry's own authors (or the
//! feed's) into its source.

mod authors;
mod common;
mod entry;
mod feed;
mod links;
mod person;
mod source;

pub use authors::resolve_authors;
pub use common::{make_category, make_generator, make_icon, make_id, make_link, make_logo};
pub use entry::make_entry;
pub use feed::make_feed;
pub use links::validate_links;
pub use person::make_author;
pub use source::make_source;

/// Keep the first value seen for a singular field.
fn set_first<T>(slot: &mut Option<T>, value: T) {
    if slot.is_none() {
        *slot = Some(value);
    }
}
