//! Atom document model (RFC 4287).
//!
//! All values are immutable once built: a value of these types has passed
//! the cardinality, uniqueness and author checks of the builders.

use std::fmt;

use serde::{Serialize, Serializer};

pub use crate::scalar::{Timestamp, Uri};
use crate::config::IANA_RELATION_PREFIX;
use crate::error::Result;
use crate::xml::XmlNode;

/// A list with at least one element: a distinguished head plus a tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmpty<T> {
    pub head: T,
    pub tail: Vec<T>,
}

impl<T> NonEmpty<T> {
    /// Create a single-element list.
    #[must_use]
    pub fn new(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Split a vector into head and tail; `None` when it is empty.
    ///
    /// # Examples
    /// ```
    /// use atomkit::NonEmpty;
    ///
    /// let list = NonEmpty::from_vec(vec![1, 2, 3]).unwrap();
    /// assert_eq!(list.head, 1);
    /// assert_eq!(list.tail, vec![2, 3]);
    /// assert!(NonEmpty::<i32>::from_vec(Vec::new()).is_none());
    /// ```
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        let mut items = items.into_iter();
        let head = items.next()?;
        Some(Self {
            head,
            tail: items.collect(),
        })
    }

    /// The first element.
    #[must_use]
    pub fn first(&self) -> &T {
        &self.head
    }

    /// Number of elements, always at least one.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Iterate over all elements, head first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Convert into a plain vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        let mut items = Vec::with_capacity(1 + self.tail.len());
        items.push(self.head);
        items.extend(self.tail);
        items
    }
}

impl<T: Serialize> Serialize for NonEmpty<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// A Person construct (`atom:author`, `atom:contributor`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Author {
    /// Create an author with only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: None,
            email: None,
        }
    }
}

/// `atom:category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// `atom:generator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generator {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<Uri>,
}

/// `atom:id`: a permanent, universally unique identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Id(pub Uri);

/// `atom:icon`: a small square image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Icon(pub Uri);

/// `atom:logo`: a larger image, twice as wide as tall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Logo(pub Uri);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Link relation (RFC 4287 §4.2.7.2).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Rel {
    #[default]
    Alternate,
    Related,
    SelfLink,
    Enclosure,
    Via,
    Custom(Uri),
}

impl Rel {
    /// Parse a `rel` attribute value.
    ///
    /// The registered tokens match case-insensitively after trimming, bare
    /// or under the IANA registry prefix; anything else is a custom
    /// relation URI.
    ///
    /// # Examples
    /// ```
    /// use atomkit::Rel;
    ///
    /// assert_eq!(Rel::parse(" Alternate ").unwrap(), Rel::Alternate);
    /// assert_eq!(Rel::parse("SELF").unwrap(), Rel::SelfLink);
    /// assert!(matches!(Rel::parse("edit").unwrap(), Rel::Custom(_)));
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        let lowered = value.trim().to_ascii_lowercase();
        let token = lowered
            .strip_prefix(IANA_RELATION_PREFIX)
            .unwrap_or(lowered.as_str());
        let rel = match token {
            "alternate" => Self::Alternate,
            "related" => Self::Related,
            "self" => Self::SelfLink,
            "enclosure" => Self::Enclosure,
            "via" => Self::Via,
            _ => Self::Custom(Uri::parse(value)?),
        };
        Ok(rel)
    }

    /// The attribute value for this relation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Alternate => "alternate",
            Self::Related => "related",
            Self::SelfLink => "self",
            Self::Enclosure => "enclosure",
            Self::Via => "via",
            Self::Custom(uri) => uri.as_str(),
        }
    }
}

impl Serialize for Rel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// `atom:link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: Uri,
    pub rel: Rel,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
}

impl Link {
    /// Create an alternate link with no other attributes.
    #[must_use]
    pub fn alternate(href: Uri) -> Self {
        Self {
            href,
            rel: Rel::Alternate,
            media_type: None,
            hreflang: None,
            title: None,
            length: None,
        }
    }
}

/// A Text construct (`title`, `subtitle`, `summary`, `rights`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TextConstruct {
    Text(String),
    Html(String),
    Xhtml(Vec<XmlNode>),
}

impl TextConstruct {
    /// The `type` attribute value of this variant.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Html(_) => "html",
            Self::Xhtml(_) => "xhtml",
        }
    }

    /// The construct as plain text. Markup is not stripped from html.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(value) | Self::Html(value) => value.clone(),
            Self::Xhtml(nodes) => nodes.iter().map(XmlNode::text_content).collect(),
        }
    }
}

/// `atom:content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text {
        value: String,
    },
    Html {
        value: String,
    },
    Xhtml {
        value: Vec<XmlNode>,
    },
    Mime {
        media_type: String,
        value: String,
    },
    Src {
        #[serde(skip_serializing_if = "Option::is_none")]
        media_type: Option<String>,
        src: Uri,
    },
}

/// `atom:source`: metadata of the feed an entry was copied from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub authors: NonEmpty<Author>,
    pub categories: Vec<Category>,
    pub contributors: Vec<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<Generator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    pub id: Id,
    pub links: NonEmpty<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<TextConstruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<TextConstruct>,
    pub title: TextConstruct,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Timestamp>,
}

/// `atom:entry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub authors: NonEmpty<Author>,
    pub categories: Vec<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    pub contributors: Vec<Author>,
    pub id: Id,
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<TextConstruct>,
    pub sources: Vec<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<TextConstruct>,
    pub title: TextConstruct,
    pub updated: Timestamp,
}

/// `atom:feed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feed {
    pub authors: Vec<Author>,
    pub categories: Vec<Category>,
    pub contributors: Vec<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<Generator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    pub id: Id,
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<TextConstruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<TextConstruct>,
    pub title: TextConstruct,
    pub updated: Timestamp,
    pub entries: Vec<Entry>,
}
