//! Configuration constants for Atom processing.

/// XML namespace name of the Atom Syndication Format (RFC 4287 §2).
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// XML namespace name of XHTML, used by the `div` wrapper of xhtml constructs.
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// The reserved `xml:` namespace (`xml:lang`, `xml:base`).
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Prefix of the IANA link relation registry; `<prefix>alternate` is the
/// same relation as `alternate` (RFC 4287 §4.2.7.2).
pub const IANA_RELATION_PREFIX: &str = "http://www.iana.org/assignments/relation/";

/// Base used to check that relative references are well-formed.
///
/// Never appears in output: relative references keep their lexical form.
pub const RELATIVE_BASE_URL: &str = "http://relative.invalid/";

/// Check whether a namespace is the Atom namespace.
///
/// # Examples
/// ```
/// use atomkit::config::{is_atom_namespace, ATOM_NAMESPACE};
///
/// assert!(is_atom_namespace(Some(ATOM_NAMESPACE)));
/// assert!(!is_atom_namespace(Some("http://purl.org/dc/elements/1.1/")));
/// assert!(!is_atom_namespace(None));
/// ```
#[must_use]
pub fn is_atom_namespace(namespace: Option<&str>) -> bool {
    namespace == Some(ATOM_NAMESPACE)
}
