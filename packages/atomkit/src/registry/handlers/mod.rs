//! Element handlers for Atom constructs.

mod container;
mod leaf;
mod person;

pub use container::*;
pub use leaf::*;
pub use person::*;
