//! Error types for atomkit.
//!
//! Every strict parse yields at most one `AtomError`: the first violation
//! encountered. Scalar parse failures carry the offending lexical value and
//! the underlying parser error as `source`.

use std::num::ParseIntError;

use thiserror::Error;

/// Main error type for the atomkit library.
#[derive(Debug, Error)]
pub enum AtomError {
    /// A mandatory child element is absent from a construct.
    #[error("Missing required XML element: <{element}> in <{context}>")]
    MissingElement { element: String, context: String },

    /// A mandatory attribute is absent from a construct.
    #[error("Missing required attribute: {attribute} on <{context}>")]
    MissingAttribute { attribute: String, context: String },

    /// A URI/IRI value could not be parsed.
    #[error("Invalid URI '{value}': {source}")]
    InvalidUri {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// A date construct is not a valid RFC 3339 timestamp.
    #[error("Invalid RFC 3339 date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A link `length` attribute is not a non-negative integer.
    #[error("Invalid link length '{value}': {source}")]
    InvalidLength {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Two alternate links in one container share `(type, hreflang)`.
    #[error(
        "Duplicate alternate link {href} (type '{media_type}', hreflang '{hreflang}') \
         conflicts with earlier link (type '{existing_media_type}', hreflang '{existing_hreflang}')"
    )]
    DuplicateAlternateLink {
        href: String,
        media_type: String,
        hreflang: String,
        existing_media_type: String,
        existing_hreflang: String,
    },

    /// No author could be found on the construct, its source or its feed.
    #[error("No author for <{context}>: none declared, none in <source>, none in <feed>")]
    UnresolvableAuthor { context: String },

    /// The document root is not the expected Atom element.
    #[error("Expected root element <{expected}> in the Atom namespace, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// XML writing failed.
    #[error("XML writing failed: {0}")]
    XmlWrite(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

impl AtomError {
    /// Shorthand for [`AtomError::MissingElement`].
    pub fn missing_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Shorthand for [`AtomError::MissingAttribute`].
    pub fn missing_attribute(attribute: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingAttribute {
            attribute: attribute.into(),
            context: context.into(),
        }
    }
}

/// Result type alias for atomkit operations.
pub type Result<T> = std::result::Result<T, AtomError>;
