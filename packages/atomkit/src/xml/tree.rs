//! Owned XML tree nodes.

use serde::Serialize;

use crate::config::ATOM_NAMESPACE;

/// Namespace-qualified name of an element or attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QName {
    /// Namespace name, `None` for unqualified names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Local part of the name.
    pub local: String,
}

impl QName {
    /// Create a name in the given namespace.
    #[must_use]
    pub fn new(namespace: Option<&str>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(String::from),
            local: local.into(),
        }
    }

    /// Create a name in the Atom namespace.
    #[must_use]
    pub fn atom(local: impl Into<String>) -> Self {
        Self::new(Some(ATOM_NAMESPACE), local)
    }

    /// Create a name without namespace (Atom attributes are unqualified).
    #[must_use]
    pub fn unqualified(local: impl Into<String>) -> Self {
        Self::new(None, local)
    }
}

/// A single attribute, kept in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

/// A child of an element: either an element or a text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum XmlNode {
    Element(Element),
    Text(String),
}

impl XmlNode {
    /// Return the element if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Return the text if this node is a text leaf.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    /// Whether this is a text leaf consisting only of whitespace.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    /// All descendant text, in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(element) => element.children.iter().map(Self::text_content).collect(),
        }
    }
}

impl From<Element> for XmlNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub name: QName,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<XmlNode>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an empty element in the Atom namespace.
    #[must_use]
    pub fn atom(local: &str) -> Self {
        Self::new(QName::atom(local))
    }

    /// Add an unqualified attribute.
    #[must_use]
    pub fn with_attribute(mut self, local: &str, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: QName::unqualified(local),
            value: value.into(),
        });
        self
    }

    /// Add an unqualified attribute when a value is present.
    #[must_use]
    pub fn with_optional_attribute(self, local: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with_attribute(local, value),
            None => self,
        }
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<XmlNode>) -> Self {
        self.push(child);
        self
    }

    /// Append a text leaf. Empty text adds nothing.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.push(XmlNode::Text(text));
        }
        self
    }

    /// Append a child node, merging adjacent text leaves.
    pub fn push(&mut self, child: impl Into<XmlNode>) {
        match (self.children.last_mut(), child.into()) {
            (Some(XmlNode::Text(previous)), XmlNode::Text(text)) => previous.push_str(&text),
            (_, child) => self.children.push(child),
        }
    }

    /// Look up an unqualified attribute by local name.
    #[must_use]
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.namespace.is_none() && attr.name.local == local)
            .map(|attr| attr.value.as_str())
    }

    /// Whether this element is `atom:<local>`.
    #[must_use]
    pub fn is_atom(&self, local: &str) -> bool {
        self.name.namespace.as_deref() == Some(ATOM_NAMESPACE) && self.name.local == local
    }

    /// Iterate over element children only.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// Concatenation of the direct text children.
    #[must_use]
    pub fn text(&self) -> String {
        self.children.iter().filter_map(XmlNode::as_text).collect()
    }

    /// Whether any direct child is a text leaf.
    #[must_use]
    pub fn has_text(&self) -> bool {
        self.children.iter().any(|child| child.as_text().is_some())
    }
}
