//! [`Element`] tree to XML text, backed by `quick-xml`.
//!
//! Namespaces are written as default-namespace declarations wherever an
//! element's namespace differs from the one in scope. Namespaced attributes
//! get a generated prefix, except `xml:` which is predeclared.

use std::borrow::Cow;
use std::fmt::Display;

use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName as XmlName;
use quick_xml::Writer;

use super::tree::{Element, XmlNode};
use crate::config::XML_NAMESPACE;
use crate::error::{AtomError, Result};

/// Serialize a document root, with XML declaration.
///
/// The root element declares its namespace as the default namespace.
///
/// # Examples
/// ```
/// use atomkit::xml::{write_document, Element};
///
/// let xml = write_document(&Element::atom("feed")).unwrap();
/// assert!(xml.contains(r#"<feed xmlns="http://www.w3.org/2005/Atom"/>"#));
/// ```
pub fn write_document(root: &Element) -> Result<String> {
    let mut writer = XmlWriter::new(true);
    writer.declaration()?;
    writer.element(root, None)?;
    writer.finish()
}

/// Serialize a list of nodes as markup, without namespace declarations.
///
/// Used to turn an HTML sub-tree back into an HTML string.
pub fn write_fragment(nodes: &[XmlNode]) -> Result<String> {
    let mut writer = XmlWriter::new(false);
    for node in nodes {
        writer.node(node, None)?;
    }
    writer.finish()
}

/// Add an attribute, escaping whitespace that attribute-value
/// normalization would otherwise turn into spaces.
fn push_attribute(start: &mut BytesStart<'_>, key: &str, value: &str) {
    let escaped = escape(value)
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;");
    start.push_attribute(Attribute {
        key: XmlName(key.as_bytes()),
        value: Cow::Owned(escaped.into_bytes()),
    });
}

fn write_error(err: impl Display) -> AtomError {
    AtomError::XmlWrite(err.to_string())
}

struct XmlWriter {
    writer: Writer<Vec<u8>>,
    namespaces: bool,
}

impl XmlWriter {
    fn new(namespaces: bool) -> Self {
        Self {
            writer: Writer::new(Vec::new()),
            namespaces,
        }
    }

    fn declaration(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(write_error)
    }

    fn node(&mut self, node: &XmlNode, default_ns: Option<&str>) -> Result<()> {
        match node {
            XmlNode::Element(element) => self.element(element, default_ns),
            XmlNode::Text(text) => self
                .writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(write_error),
        }
    }

    fn element(&mut self, element: &Element, default_ns: Option<&str>) -> Result<()> {
        let local = element.name.local.as_str();
        let namespace = element.name.namespace.as_deref();
        let mut start = BytesStart::new(local);

        if self.namespaces && namespace != default_ns {
            start.push_attribute(("xmlns", namespace.unwrap_or("")));
        }

        let mut prefix_count = 0;
        for attr in &element.attributes {
            let name = &attr.name;
            match name.namespace.as_deref() {
                Some(XML_NAMESPACE) => {
                    let qualified = format!("xml:{}", name.local);
                    push_attribute(&mut start, &qualified, &attr.value);
                }
                Some(other) if self.namespaces => {
                    prefix_count += 1;
                    let prefix = format!("ns{prefix_count}");
                    let declaration = format!("xmlns:{prefix}");
                    let qualified = format!("{prefix}:{}", name.local);
                    push_attribute(&mut start, &declaration, other);
                    push_attribute(&mut start, &qualified, &attr.value);
                }
                _ => push_attribute(&mut start, &name.local, &attr.value),
            }
        }

        if element.children.is_empty() {
            return self
                .writer
                .write_event(Event::Empty(start))
                .map_err(write_error);
        }

        self.writer
            .write_event(Event::Start(start))
            .map_err(write_error)?;
        for child in &element.children {
            self.node(child, namespace)?;
        }
        self.writer
            .write_event(Event::End(BytesEnd::new(local)))
            .map_err(write_error)
    }

    fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner()).map_err(write_error)
    }
}
