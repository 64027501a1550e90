//! XML text to [`Element`] tree, backed by `roxmltree`.

use roxmltree::{Document, Node};

use super::tree::{Attribute, Element, QName, XmlNode};
use crate::error::Result;

/// Parse an XML document into an owned element tree.
///
/// Entity references are decoded and CDATA sections become text. Comments
/// and processing instructions are dropped.
///
/// # Examples
/// ```
/// use atomkit::xml::parse_document;
///
/// let root = parse_document(r#"<feed xmlns="http://www.w3.org/2005/Atom"/>"#).unwrap();
/// assert!(root.is_atom("feed"));
/// ```
pub fn parse_document(xml: &str) -> Result<Element> {
    let doc = Document::parse(xml)?;
    Ok(from_node(doc.root_element()))
}

/// `xmlns=""` undeclares the default namespace; treat it as no namespace.
fn namespace(uri: Option<&str>) -> Option<&str> {
    uri.filter(|uri| !uri.is_empty())
}

/// Convert a `roxmltree` element node into an owned [`Element`].
#[must_use]
pub fn from_node(node: Node<'_, '_>) -> Element {
    let name = QName::new(namespace(node.tag_name().namespace()), node.tag_name().name());
    let mut element = Element::new(name);

    element.attributes = node
        .attributes()
        .map(|attr| Attribute {
            name: QName::new(namespace(attr.namespace()), attr.name()),
            value: attr.value().to_string(),
        })
        .collect();

    for child in node.children() {
        if child.is_element() {
            element.push(XmlNode::Element(from_node(child)));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                element.push(XmlNode::Text(text.to_string()));
            }
        }
    }

    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ATOM_NAMESPACE, XHTML_NAMESPACE, XML_NAMESPACE};

    #[test]
    fn test_parse_namespaces() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:x="http://www.w3.org/1999/xhtml">
            <title>t</title><x:div/></feed>"#;
        let root = parse_document(xml).unwrap();

        assert_eq!(root.name.namespace.as_deref(), Some(ATOM_NAMESPACE));
        let children: Vec<_> = root.elements().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].name.namespace.as_deref(), Some(XHTML_NAMESPACE));
        assert_eq!(children[1].name.local, "div");
    }

    #[test]
    fn test_undeclared_default_namespace_is_none() {
        let root = parse_document(r#"<a xmlns="urn:x"><b xmlns="" c="1"/></a>"#).unwrap();
        let child = root.elements().next().unwrap();
        assert_eq!(root.name.namespace.as_deref(), Some("urn:x"));
        assert_eq!(child.name, QName::unqualified("b"));
        assert_eq!(child.attributes[0].name, QName::unqualified("c"));
    }

    #[test]
    fn test_namespace_declarations_are_not_attributes() {
        let root = parse_document(r#"<a xmlns="urn:x" xmlns:p="urn:p" b="1"/>"#).unwrap();
        assert_eq!(root.attributes.len(), 1);
        assert_eq!(root.attribute("b"), Some("1"));
    }

    #[test]
    fn test_xml_lang_attribute_is_namespaced() {
        let root = parse_document(r#"<a xml:lang="nl"/>"#).unwrap();
        assert_eq!(root.attributes[0].name.namespace.as_deref(), Some(XML_NAMESPACE));
        assert_eq!(root.attribute("lang"), None);
    }

    #[test]
    fn test_entities_and_cdata_become_text() {
        let root = parse_document("<t>a &amp; b<![CDATA[ <c> ]]></t>").unwrap();
        assert_eq!(root.text(), "a & b <c> ");
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_comments_are_dropped_and_text_merged() {
        let root = parse_document("<t>one<!-- note -->two</t>").unwrap();
        assert_eq!(root.children, vec![XmlNode::Text("onetwo".to_string())]);
    }

    #[test]
    fn test_malformed_xml_fails() {
        assert!(parse_document("<feed>").is_err());
    }
}
