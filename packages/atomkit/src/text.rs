//! Text construct and content resolution (RFC 4287 §3.1, §4.1.3).
//!
//! The `type` attribute alone decides the variant. The payload is then
//! extracted from the element's children, with these leniency policies for
//! feeds seen in the wild (each logs a warning):
//!
//! - text without any text node resolves to the empty string;
//! - html delivered as a parsed sub-tree is written back to markup;
//! - xhtml without a single `div` wrapper keeps its children unchanged.

use crate::error::Result;
use crate::scalar::Uri;
use crate::types::{Content, TextConstruct};
use crate::xml::utils::significant_children;
use crate::xml::{get_tag_name, write_fragment, Element, XmlNode};

/// Content model selected by a `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextType {
    Text,
    Html,
    Xhtml,
}

/// Classify a text construct `type` attribute. Unknown values fall back to text.
fn text_type(value: Option<&str>) -> TextType {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("html") => TextType::Html,
        Some("xhtml") | Some("application/xhtml+xml") => TextType::Xhtml,
        _ => TextType::Text,
    }
}

/// Resolve a Text construct element (`title`, `subtitle`, `summary`, `rights`).
///
/// # Examples
/// ```
/// use atomkit::text::resolve_text_construct;
/// use atomkit::xml::parse_document;
/// use atomkit::TextConstruct;
///
/// let title = parse_document(r#"<title xmlns="http://www.w3.org/2005/Atom">Hello</title>"#).unwrap();
/// assert_eq!(
///     resolve_text_construct(&title).unwrap(),
///     TextConstruct::Text("Hello".to_string())
/// );
/// ```
pub fn resolve_text_construct(element: &Element) -> Result<TextConstruct> {
    let resolved = match text_type(element.attribute("type")) {
        TextType::Text => TextConstruct::Text(text_content(element)),
        TextType::Html => TextConstruct::Html(html_content(element)?),
        TextType::Xhtml => TextConstruct::Xhtml(xhtml_content(element)),
    };
    Ok(resolved)
}

/// Resolve an `atom:content` element.
///
/// A `src` attribute makes the content out-of-line; any children are then
/// ignored. Otherwise `type` selects text, html, xhtml, or any other media
/// type whose payload is the element text.
pub fn resolve_content(element: &Element) -> Result<Content> {
    let media_type = element
        .attribute("type")
        .map(str::trim)
        .filter(|t| !t.is_empty());

    if let Some(src) = element.attribute("src") {
        if !element.children.iter().all(XmlNode::is_whitespace) {
            tracing::warn!(src, "Ignoring inline payload of out-of-line content");
        }
        return Ok(Content::Src {
            media_type: media_type.map(String::from),
            src: Uri::parse(src)?,
        });
    }

    let content = match media_type.map(str::to_ascii_lowercase).as_deref() {
        None | Some("text") => Content::Text {
            value: text_content(element),
        },
        Some("html") => Content::Html {
            value: html_content(element)?,
        },
        Some("xhtml") => Content::Xhtml {
            value: xhtml_content(element),
        },
        Some(_) => Content::Mime {
            media_type: media_type.unwrap_or_default().to_string(),
            value: element.text(),
        },
    };
    Ok(content)
}

/// Concatenated text children, or the empty string when there are none.
fn text_content(element: &Element) -> String {
    if !element.has_text() {
        tracing::warn!(
            tag = %get_tag_name(element),
            "Text construct has no text, using empty string"
        );
    }
    element.text()
}

/// Escaped HTML as a string.
///
/// A single text node is already unescaped by the XML layer and is used
/// verbatim. Element children mean the HTML was not escaped; they are
/// written back to markup.
fn html_content(element: &Element) -> Result<String> {
    if element.elements().next().is_none() {
        return Ok(text_content(element));
    }
    tracing::warn!(
        tag = %get_tag_name(element),
        "HTML content was not escaped, rebuilding markup from elements"
    );
    write_fragment(&element.children)
}

/// Children of the XHTML `div` wrapper.
fn xhtml_content(element: &Element) -> Vec<XmlNode> {
    match significant_children(&element.children).as_slice() {
        [XmlNode::Element(div)] if get_tag_name(div) == "div" => div.children.clone(),
        _ => {
            tracing::warn!(
                tag = %get_tag_name(element),
                "XHTML construct without a single div wrapper, keeping content as is"
            );
            element.children.clone()
        }
    }
}
