//! Atomkit - Atom Syndication Format (RFC 4287) document model.
//!
//! This crate turns an XML element tree into a typed, validated Atom model
//! and writes the model back out as XML.
//!
//! # Example
//!
//! ```
//! use atomkit::{parse_str, to_string, TextConstruct};
//!
//! let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
//!   <title>Example Feed</title>
//!   <updated>2003-12-13T18:30:02Z</updated>
//!   <author><name>John Doe</name></author>
//!   <id>urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6</id>
//!   <entry>
//!     <title>Atom-Powered Robots Run Amok</title>
//!     <link href="http://example.org/2003/12/13/atom03"/>
//!     <id>urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a</id>
//!     <updated>2003-12-13T18:30:02Z</updated>
//!     <summary>Some text.</summary>
//!   </entry>
//! </feed>"#;
//!
//! let feed = parse_str(xml).unwrap();
//! assert_eq!(feed.title, TextConstruct::Text("Example Feed".to_string()));
//! assert_eq!(feed.entries[0].authors.first().name, "John Doe");
//!
//! let written = to_string(&feed).unwrap();
//! assert_eq!(parse_str(&written).unwrap(), feed);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Namespace constants and link relation vocabulary
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Owned XML tree, reader, writer and utilities
//! - [`scalar`]: URI, date and integer leaf parsers
//! - [`types`]: The Atom model (Feed, Entry, Source, ...)
//! - [`registry`]: Element dispatcher and per-construct handlers
//! - [`text`]: Text construct and content resolution
//! - [`build`]: Construct builders, link validation, author inheritance
//! - [`serialize`]: Model to element tree
//! - [`document`]: Top-level parse and serialize functions
//! - [`cli`]: Command-line interface

pub mod build;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod registry;
pub mod scalar;
pub mod serialize;
pub mod text;
pub mod types;
pub mod xml;

// Re-export main functions
pub use document::{
    entry_to_element, entry_to_string, parse, parse_entry, parse_entry_str, parse_str,
    parse_unsafe, parse_unsafe_str, to_element, to_string,
};

// Re-export commonly used items
pub use error::{AtomError, Result};
pub use registry::{Fact, Facts};
pub use types::{
    Author, Category, Content, Entry, Feed, Generator, Icon, Id, Link, Logo, NonEmpty, Rel,
    Source, TextConstruct, Timestamp, Uri,
};
