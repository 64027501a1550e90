//! End-to-end tests from XML text to the Atom model and back.
//!
//! Fixtures live in `tests/fixtures/`; `rfc4287_extensive.xml` is the
//! extensive example document from RFC 4287 §1.1.

use std::fs;
use std::path::Path;

use atomkit::{
    parse_entry_str, parse_str, parse_unsafe_str, to_string, AtomError, Author, Content, Feed,
    NonEmpty, Rel, TextConstruct,
};
use pretty_assertions::assert_eq;

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn parse_fixture(name: &str) -> Feed {
    parse_str(&load_fixture(name)).unwrap_or_else(|e| panic!("Failed to parse {name}: {e}"))
}

#[test]
fn test_extensive_feed_metadata() {
    let feed = parse_fixture("rfc4287_extensive.xml");

    assert_eq!(feed.id.to_string(), "tag:example.org,2003:3");
    assert_eq!(feed.title, TextConstruct::Text("dive into mark".to_string()));
    let Some(TextConstruct::Html(subtitle)) = &feed.subtitle else {
        panic!("expected html subtitle, got {:?}", feed.subtitle);
    };
    assert!(subtitle.contains("A <em>lot</em> of effort"));

    let generator = feed.generator.as_ref().unwrap();
    assert_eq!(generator.content, "Example Toolkit");
    assert_eq!(generator.version.as_deref(), Some("1.0"));
    assert_eq!(
        generator.uri.as_ref().map(|u| u.as_str()),
        Some("http://www.example.com/")
    );

    let rels: Vec<_> = feed.links.iter().map(|l| l.rel.clone()).collect();
    assert_eq!(rels, vec![Rel::Alternate, Rel::SelfLink]);
    assert!(feed.authors.is_empty());
}

#[test]
fn test_extensive_feed_entry() {
    let feed = parse_fixture("rfc4287_extensive.xml");
    assert_eq!(feed.entries.len(), 1);
    let entry = &feed.entries[0];

    let author = entry.authors.first();
    assert_eq!(author.name, "Mark Pilgrim");
    assert_eq!(author.email.as_deref(), Some("f8dy@example.com"));
    assert_eq!(
        entry
            .contributors
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Sam Ruby", "Joe Gregorio"]
    );

    let enclosure = &entry.links[1];
    assert_eq!(enclosure.rel, Rel::Enclosure);
    assert_eq!(enclosure.length, Some(1337));
    assert_eq!(enclosure.media_type.as_deref(), Some("audio/mpeg"));

    let published = entry.published.unwrap();
    assert_eq!(published.to_rfc3339(), "2003-12-13T08:29:29-04:00");

    let Some(Content::Xhtml { value }) = &entry.content else {
        panic!("expected xhtml content, got {:?}", entry.content);
    };
    let paragraph = value.iter().find_map(|n| n.as_element()).unwrap();
    assert_eq!(paragraph.name.local, "p");
}

#[test]
fn test_author_cascade() {
    let feed = parse_fixture("author_cascade.xml");
    let authors: Vec<_> = feed
        .entries
        .iter()
        .map(|e| e.authors.first().name.as_str())
        .collect();
    assert_eq!(authors, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(
        feed.entries[0].authors,
        NonEmpty::new(Author::named("Alice"))
    );
}

#[test]
fn test_text_and_content_variants() {
    let feed = parse_fixture("author_cascade.xml");
    let entry = &feed.entries[2];

    let Some(TextConstruct::Xhtml(nodes)) = &entry.summary else {
        panic!("expected xhtml summary, got {:?}", entry.summary);
    };
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].as_text(), Some("Hi "));
    assert_eq!(nodes[1].as_element().map(|b| b.text()), Some("there".to_string()));

    assert_eq!(
        entry.content,
        Some(Content::Src {
            media_type: Some("application/pdf".to_string()),
            src: "http://x/doc.pdf".parse().unwrap(),
        })
    );
}

#[test]
fn test_round_trip_fixtures() {
    for name in ["rfc4287_extensive.xml", "author_cascade.xml"] {
        let feed = parse_fixture(name);
        let written = to_string(&feed).unwrap();
        let reparsed = parse_str(&written).unwrap_or_else(|e| panic!("{name}: {e}\n{written}"));
        assert_eq!(reparsed, feed, "round trip of {name}");
    }
}

#[test]
fn test_round_trip_is_stable() {
    let feed = parse_fixture("rfc4287_extensive.xml");
    let first = to_string(&feed).unwrap();
    let second = to_string(&parse_str(&first).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_alternate_link() {
    let err = parse_str(&load_fixture("duplicate_alternate.xml")).unwrap_err();
    let AtomError::DuplicateAlternateLink {
        href, media_type, ..
    } = err
    else {
        panic!("expected duplicate alternate link, got {err:?}");
    };
    assert_eq!(href, "B");
    assert_eq!(media_type, "text/html");
}

#[test]
fn test_alternates_differing_in_hreflang() {
    let xml = load_fixture("duplicate_alternate.xml").replace(
        r#"type="text/html" href="B""#,
        r#"type="text/html" hreflang="fr" href="B""#,
    );
    let feed = parse_str(&xml).unwrap();
    assert_eq!(feed.entries[0].links.len(), 2);
}

#[test]
fn test_iana_alternate_counts_as_alternate() {
    let xml = load_fixture("duplicate_alternate.xml")
        .replace(
            r#"rel="alternate" type="text/html" href="A""#,
            r#"rel="http://www.iana.org/assignments/relation/alternate" href="A""#,
        )
        .replace(r#"rel="alternate" type="text/html" href="B""#, r#"href="B""#);
    let err = parse_str(&xml).unwrap_err();
    assert!(matches!(err, AtomError::DuplicateAlternateLink { ref href, .. } if href == "B"));
}

#[test]
fn test_permissive_parse_accepts_duplicates() {
    let facts = parse_unsafe_str(&load_fixture("duplicate_alternate.xml")).unwrap();
    let entry = facts.entries().next().unwrap();
    assert_eq!(entry.count("link"), 2);
}

#[test]
fn test_entry_document() {
    let entry = parse_entry_str(&load_fixture("entry.xml")).unwrap();
    assert_eq!(
        entry.title,
        TextConstruct::Html("<b>Standalone</b> entry".to_string())
    );
    assert_eq!(entry.categories[0].term, "news");
    assert_eq!(entry.categories[0].label.as_deref(), Some("News"));
    assert_eq!(
        entry.content,
        Some(Content::Text {
            value: "plain".to_string()
        })
    );
}

#[test]
fn test_missing_required_elements() {
    let base = load_fixture("entry.xml");

    let without_id = base.replace("<id>urn:entry</id>", "");
    let err = parse_entry_str(&without_id).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing required XML element: <id> in <entry>"
    );

    let without_updated = base.replace("<updated>2003-12-13T18:30:02Z</updated>", "");
    let err = parse_entry_str(&without_updated).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing required XML element: <updated> in <entry>"
    );
}

#[test]
fn test_malformed_scalars_propagate() {
    let xml = load_fixture("entry.xml").replace("2003-12-13T18:30:02Z", "yesterday");
    assert!(matches!(
        parse_entry_str(&xml),
        Err(AtomError::InvalidDate { .. })
    ));
    assert!(matches!(
        parse_unsafe_str(&xml),
        Err(AtomError::InvalidDate { .. })
    ));
}

#[test]
fn test_malformed_xml() {
    assert!(matches!(
        parse_str("<feed xmlns=\"http://www.w3.org/2005/Atom\">"),
        Err(AtomError::XmlParse(_))
    ));
}
