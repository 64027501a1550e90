//! Duplicate alternate link detection (RFC 4287 §4.1.1, §4.1.2).

use std::collections::HashMap;

use crate::error::{AtomError, Result};
use crate::types::{Link, Rel};

/// Check that no two alternate links share `(type, hreflang)`.
///
/// A missing attribute counts as the empty string. Links with any other
/// relation are not checked. The list is returned unchanged.
///
/// # Errors
/// Returns [`AtomError::DuplicateAlternateLink`] for the first conflicting link.
pub fn validate_links(links: Vec<Link>) -> Result<Vec<Link>> {
    check_alternates(&links)?;
    Ok(links)
}

fn check_alternates(links: &[Link]) -> Result<()> {
    let mut seen: HashMap<(&str, &str), &Link> = HashMap::new();

    for link in links.iter().filter(|link| link.rel == Rel::Alternate) {
        let key = (
            link.media_type.as_deref().unwrap_or(""),
            link.hreflang.as_deref().unwrap_or(""),
        );
        if let Some(existing) = seen.insert(key, link) {
            return Err(AtomError::DuplicateAlternateLink {
                href: link.href.to_string(),
                media_type: key.0.to_string(),
                hreflang: key.1.to_string(),
                existing_media_type: existing.media_type.clone().unwrap_or_default(),
                existing_hreflang: existing.hreflang.clone().unwrap_or_default(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Uri;

    fn link(href: &str, rel: Rel, media_type: Option<&str>, hreflang: Option<&str>) -> Link {
        Link {
            href: Uri::parse(href).unwrap(),
            rel,
            media_type: media_type.map(String::from),
            hreflang: hreflang.map(String::from),
            title: None,
            length: None,
        }
    }

    #[test]
    fn test_duplicate_alternate_fails() {
        let links = vec![
            link("http://a/", Rel::Alternate, Some("text/html"), None),
            link("http://b/", Rel::Alternate, Some("text/html"), None),
        ];
        let err = validate_links(links).unwrap_err();
        assert!(matches!(
            err,
            AtomError::DuplicateAlternateLink { ref href, ref media_type, .. }
                if href == "http://b/" && media_type == "text/html"
        ));
    }

    #[test]
    fn test_different_hreflang_is_fine() {
        let links = vec![
            link("http://a/", Rel::Alternate, Some("text/html"), Some("en")),
            link("http://b/", Rel::Alternate, Some("text/html"), Some("nl")),
        ];
        assert_eq!(validate_links(links.clone()).unwrap(), links);
    }

    #[test]
    fn test_missing_attributes_are_empty_keys() {
        let links = vec![
            link("http://a/", Rel::Alternate, None, None),
            link("http://b/", Rel::Alternate, Some(""), Some("")),
        ];
        assert!(validate_links(links).is_err());
    }

    #[test]
    fn test_non_alternate_links_are_not_checked() {
        let links = vec![
            link("http://a/", Rel::Related, Some("text/html"), None),
            link("http://b/", Rel::Related, Some("text/html"), None),
            link("http://c/", Rel::Alternate, Some("text/html"), None),
            link("http://d/", Rel::SelfLink, Some("text/html"), None),
        ];
        assert_eq!(validate_links(links).unwrap().len(), 4);
    }

    #[test]
    fn test_empty_list() {
        assert!(validate_links(Vec::new()).unwrap().is_empty());
    }
}
