//! Types for the element dispatcher: recognised names and facts.

use std::fmt;

use crate::scalar::{Timestamp, Uri};
use crate::types::{Content, Icon, Id, Logo, Rel, TextConstruct};

/// Atom element names the dispatcher recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Author,
    Category,
    Content,
    Contributor,
    Email,
    Entry,
    Generator,
    Icon,
    Id,
    Link,
    Logo,
    Name,
    Published,
    Rights,
    Source,
    Subtitle,
    Summary,
    Title,
    Updated,
    Uri,
}

impl Tag {
    /// Map a local name in the Atom namespace to a tag.
    #[must_use]
    pub fn from_local_name(name: &str) -> Option<Self> {
        let tag = match name {
            "author" => Self::Author,
            "category" => Self::Category,
            "content" => Self::Content,
            "contributor" => Self::Contributor,
            "email" => Self::Email,
            "entry" => Self::Entry,
            "generator" => Self::Generator,
            "icon" => Self::Icon,
            "id" => Self::Id,
            "link" => Self::Link,
            "logo" => Self::Logo,
            "name" => Self::Name,
            "published" => Self::Published,
            "rights" => Self::Rights,
            "source" => Self::Source,
            "subtitle" => Self::Subtitle,
            "summary" => Self::Summary,
            "title" => Self::Title,
            "updated" => Self::Updated,
            "uri" => Self::Uri,
            _ => return None,
        };
        Some(tag)
    }

    /// The element's local name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Category => "category",
            Self::Content => "content",
            Self::Contributor => "contributor",
            Self::Email => "email",
            Self::Entry => "entry",
            Self::Generator => "generator",
            Self::Icon => "icon",
            Self::Id => "id",
            Self::Link => "link",
            Self::Logo => "logo",
            Self::Name => "name",
            Self::Published => "published",
            Self::Rights => "rights",
            Self::Source => "source",
            Self::Subtitle => "subtitle",
            Self::Summary => "summary",
            Self::Title => "title",
            Self::Updated => "updated",
            Self::Uri => "uri",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unqualified attribute names the dispatcher recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    Href,
    Hreflang,
    Label,
    Length,
    Rel,
    Scheme,
    Src,
    Term,
    Title,
    Type,
    Uri,
    Version,
}

impl Attr {
    /// Map an unqualified attribute name to an attribute.
    #[must_use]
    pub fn from_local_name(name: &str) -> Option<Self> {
        let attr = match name {
            "href" => Self::Href,
            "hreflang" => Self::Hreflang,
            "label" => Self::Label,
            "length" => Self::Length,
            "rel" => Self::Rel,
            "scheme" => Self::Scheme,
            "src" => Self::Src,
            "term" => Self::Term,
            "title" => Self::Title,
            "type" => Self::Type,
            "uri" => Self::Uri,
            "version" => Self::Version,
            _ => return None,
        };
        Some(attr)
    }
}

/// A tagged contribution extracted from one attribute or child of a node.
///
/// Leaf scalars are parsed when the fact is created. Composite constructs
/// (`author`, `link`, `entry`, ...) stay as nested [`Facts`] until a
/// builder reduces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    /// Non-whitespace text directly inside the node, trimmed.
    LeafText(String),

    // Attributes.
    Term(String),
    Scheme(Uri),
    Label(String),
    Href(Uri),
    Rel(Rel),
    MediaType(String),
    Hreflang(String),
    LinkTitle(String),
    Length(u64),
    Version(String),

    // Person construct children (`uri` is also the generator attribute).
    Name(String),
    Email(String),
    Uri(Uri),

    // Resolved constructs.
    Id(Id),
    Icon(Icon),
    Logo(Logo),
    Updated(Timestamp),
    Published(Timestamp),
    Title(TextConstruct),
    Subtitle(TextConstruct),
    Summary(TextConstruct),
    Rights(TextConstruct),
    Content(Content),

    // Deferred constructs.
    Author(Facts),
    Contributor(Facts),
    Category(Facts),
    Generator(Facts),
    Link(Facts),
    Source(Facts),
    Entry(Facts),
}

impl Fact {
    /// Name of the attribute or element this fact came from.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeafText(_) => "#text",
            Self::Term(_) => "term",
            Self::Scheme(_) => "scheme",
            Self::Label(_) => "label",
            Self::Href(_) => "href",
            Self::Rel(_) => "rel",
            Self::MediaType(_) => "type",
            Self::Hreflang(_) => "hreflang",
            Self::LinkTitle(_) => "title",
            Self::Length(_) => "length",
            Self::Version(_) => "version",
            Self::Name(_) => "name",
            Self::Email(_) => "email",
            Self::Uri(_) => "uri",
            Self::Id(_) => "id",
            Self::Icon(_) => "icon",
            Self::Logo(_) => "logo",
            Self::Updated(_) => "updated",
            Self::Published(_) => "published",
            Self::Title(_) => "title",
            Self::Subtitle(_) => "subtitle",
            Self::Summary(_) => "summary",
            Self::Rights(_) => "rights",
            Self::Content(_) => "content",
            Self::Author(_) => "author",
            Self::Contributor(_) => "contributor",
            Self::Category(_) => "category",
            Self::Generator(_) => "generator",
            Self::Link(_) => "link",
            Self::Source(_) => "source",
            Self::Entry(_) => "entry",
        }
    }
}

/// Ordered list of facts for one node.
///
/// This is also the loosely-typed result of the permissive parse: no
/// cardinality or uniqueness rule has been applied to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facts(Vec<Fact>);

impl Facts {
    /// Create an empty fact list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fact.
    pub fn push(&mut self, fact: Fact) {
        self.0.push(fact);
    }

    /// Number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no fact was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the facts in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fact> {
        self.0.iter()
    }

    /// Count facts with the given name.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.0.iter().filter(|fact| fact.name() == name).count()
    }

    /// Fact lists of the `entry` children, in document order.
    pub fn entries(&self) -> impl Iterator<Item = &Facts> {
        self.0.iter().filter_map(|fact| match fact {
            Fact::Entry(entry) => Some(entry),
            _ => None,
        })
    }

    /// First title fact, if any.
    #[must_use]
    pub fn title(&self) -> Option<&TextConstruct> {
        self.0.iter().find_map(|fact| match fact {
            Fact::Title(title) => Some(title),
            _ => None,
        })
    }
}

impl From<Vec<Fact>> for Facts {
    fn from(facts: Vec<Fact>) -> Self {
        Self(facts)
    }
}

impl IntoIterator for Facts {
    type Item = Fact;
    type IntoIter = std::vec::IntoIter<Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Facts {
    type Item = &'a Fact;
    type IntoIter = std::slice::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
