//! Element dispatcher.
//!
//! Every construct is parsed the same way: [`dispatch`] walks the node's
//! attributes and Atom children, asks the construct's [`ElementHandler`]
//! for a [`Fact`] per recognised name, and returns the ordered [`Facts`].
//! Builders in [`crate::build`] then reduce the facts into model values.

mod engine;
mod handler;
pub mod handlers;
mod types;

pub use engine::dispatch;
pub use handler::ElementHandler;
pub use types::{Attr, Fact, Facts, Tag};
