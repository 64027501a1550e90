//! XML tree boundary.
//!
//! The Atom core never touches bytes. It consumes and produces the owned
//! [`Element`] tree defined here; [`reader`] and [`writer`] convert between
//! that tree and XML text.

pub mod reader;
mod tree;
pub mod utils;
pub mod writer;

pub use reader::parse_document;
pub use tree::{Attribute, Element, QName, XmlNode};
pub use utils::{get_tag_name, leaf_text};
pub use writer::{write_document, write_fragment};
