//! Model to [`Element`] tree.
//!
//! Each construct is written as the inverse of its builder. Children come in
//! a fixed order; optional fields that are `None` are left out. Text
//! constructs and content always carry their `type` attribute, and links
//! always carry `rel`, so that re-parsing the output gives back an equal
//! model.

use crate::config::XHTML_NAMESPACE;
use crate::scalar::{format_date, Timestamp, Uri};
use crate::types::{
    Author, Category, Content, Entry, Feed, Generator, Link, Source, TextConstruct,
};
use crate::xml::{Element, QName, XmlNode};

/// Serialize a feed.
#[must_use]
pub fn feed_to_element(feed: &Feed) -> Element {
    let mut element = Element::atom("feed");
    push_people(&mut element, "author", &feed.authors);
    push_categories(&mut element, &feed.categories);
    push_people(&mut element, "contributor", &feed.contributors);
    if let Some(generator) = &feed.generator {
        element.push(generator_element(generator));
    }
    if let Some(icon) = &feed.icon {
        element.push(uri_element("icon", &icon.0));
    }
    element.push(uri_element("id", &feed.id.0));
    push_links(&mut element, &feed.links);
    if let Some(logo) = &feed.logo {
        element.push(uri_element("logo", &logo.0));
    }
    push_text(&mut element, "rights", feed.rights.as_ref());
    push_text(&mut element, "subtitle", feed.subtitle.as_ref());
    push_text(&mut element, "title", Some(&feed.title));
    element.push(date_element("updated", &feed.updated));
    for entry in &feed.entries {
        element.push(entry_to_element(entry));
    }
    element
}

/// Serialize an entry.
///
/// Authors are always written out, including inherited ones.
#[must_use]
pub fn entry_to_element(entry: &Entry) -> Element {
    let mut element = Element::atom("entry");
    for author in entry.authors.iter() {
        element.push(person_element("author", author));
    }
    push_categories(&mut element, &entry.categories);
    if let Some(content) = &entry.content {
        element.push(content_element(content));
    }
    push_people(&mut element, "contributor", &entry.contributors);
    element.push(uri_element("id", &entry.id.0));
    push_links(&mut element, &entry.links);
    if let Some(published) = &entry.published {
        element.push(date_element("published", published));
    }
    push_text(&mut element, "rights", entry.rights.as_ref());
    for source in &entry.sources {
        element.push(source_to_element(source));
    }
    push_text(&mut element, "summary", entry.summary.as_ref());
    push_text(&mut element, "title", Some(&entry.title));
    element.push(date_element("updated", &entry.updated));
    element
}

/// Serialize an entry's source.
#[must_use]
pub fn source_to_element(source: &Source) -> Element {
    let mut element = Element::atom("source");
    for author in source.authors.iter() {
        element.push(person_element("author", author));
    }
    push_categories(&mut element, &source.categories);
    push_people(&mut element, "contributor", &source.contributors);
    if let Some(generator) = &source.generator {
        element.push(generator_element(generator));
    }
    if let Some(icon) = &source.icon {
        element.push(uri_element("icon", &icon.0));
    }
    element.push(uri_element("id", &source.id.0));
    for link in source.links.iter() {
        element.push(link_element(link));
    }
    if let Some(logo) = &source.logo {
        element.push(uri_element("logo", &logo.0));
    }
    push_text(&mut element, "rights", source.rights.as_ref());
    push_text(&mut element, "subtitle", source.subtitle.as_ref());
    push_text(&mut element, "title", Some(&source.title));
    if let Some(updated) = &source.updated {
        element.push(date_element("updated", updated));
    }
    element
}

fn push_people(parent: &mut Element, tag: &str, people: &[Author]) {
    for person in people {
        parent.push(person_element(tag, person));
    }
}

fn push_categories(parent: &mut Element, categories: &[Category]) {
    for category in categories {
        parent.push(category_element(category));
    }
}

fn push_links(parent: &mut Element, links: &[Link]) {
    for link in links {
        parent.push(link_element(link));
    }
}

fn push_text(parent: &mut Element, tag: &str, text: Option<&TextConstruct>) {
    if let Some(text) = text {
        parent.push(text_element(tag, text));
    }
}

fn person_element(tag: &str, person: &Author) -> Element {
    let mut element =
        Element::atom(tag).with_child(Element::atom("name").with_text(person.name.as_str()));
    if let Some(uri) = &person.uri {
        element.push(uri_element("uri", uri));
    }
    if let Some(email) = &person.email {
        element.push(Element::atom("email").with_text(email.as_str()));
    }
    element
}

fn category_element(category: &Category) -> Element {
    Element::atom("category")
        .with_attribute("term", category.term.as_str())
        .with_optional_attribute("scheme", category.scheme.as_ref().map(Uri::as_str))
        .with_optional_attribute("label", category.label.as_deref())
}

fn generator_element(generator: &Generator) -> Element {
    Element::atom("generator")
        .with_optional_attribute("uri", generator.uri.as_ref().map(Uri::as_str))
        .with_optional_attribute("version", generator.version.as_deref())
        .with_text(generator.content.as_str())
}

fn link_element(link: &Link) -> Element {
    Element::atom("link")
        .with_attribute("href", link.href.as_str())
        .with_attribute("rel", link.rel.as_str())
        .with_optional_attribute("type", link.media_type.as_deref())
        .with_optional_attribute("hreflang", link.hreflang.as_deref())
        .with_optional_attribute("title", link.title.as_deref())
        .with_optional_attribute("length", link.length.map(|l| l.to_string()))
}

fn uri_element(tag: &str, uri: &Uri) -> Element {
    Element::atom(tag).with_text(uri.as_str())
}

fn date_element(tag: &str, date: &Timestamp) -> Element {
    Element::atom(tag).with_text(format_date(date))
}

/// The `div` wrapper around inline XHTML.
fn xhtml_div(nodes: &[XmlNode]) -> Element {
    let mut div = Element::new(QName::new(Some(XHTML_NAMESPACE), "div"));
    for node in nodes {
        div.push(node.clone());
    }
    div
}

fn text_element(tag: &str, text: &TextConstruct) -> Element {
    let element = Element::atom(tag).with_attribute("type", text.type_name());
    match text {
        TextConstruct::Text(value) | TextConstruct::Html(value) => {
            element.with_text(value.as_str())
        }
        TextConstruct::Xhtml(nodes) => element.with_child(xhtml_div(nodes)),
    }
}

fn content_element(content: &Content) -> Element {
    let element = Element::atom("content");
    match content {
        Content::Text { value } => element.with_attribute("type", "text").with_text(value.as_str()),
        Content::Html { value } => element.with_attribute("type", "html").with_text(value.as_str()),
        Content::Xhtml { value } => element
            .with_attribute("type", "xhtml")
            .with_child(xhtml_div(value)),
        Content::Mime { media_type, value } => element
            .with_attribute("type", media_type.as_str())
            .with_text(value.as_str()),
        Content::Src { media_type, src } => element
            .with_optional_attribute("type", media_type.as_deref())
            .with_attribute("src", src.as_str()),
    }
}
