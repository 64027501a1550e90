//! Leaf value parsers: URIs, RFC 3339 dates and link lengths.
//!
//! Failures are reported as the matching `Invalid*` error carrying the
//! lexical value, and are propagated by the builders unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use url::Url;

use crate::config::RELATIVE_BASE_URL;
use crate::error::{AtomError, Result};

/// Timestamp of an Atom date construct.
pub type Timestamp = DateTime<FixedOffset>;

/// An IRI reference, absolute or relative.
///
/// The value is validated with the `url` crate but stored in its original
/// (trimmed) lexical form, so serialization reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Uri(String);

impl Uri {
    /// Parse and validate a URI reference.
    ///
    /// # Examples
    /// ```
    /// use atomkit::Uri;
    ///
    /// assert!(Uri::parse("http://example.org/2003/12/13/atom03").is_ok());
    /// assert!(Uri::parse("tag:example.org,2003:3.2397").is_ok());
    /// assert!(Uri::parse("/relative/path").is_ok());
    /// assert!(Uri::parse("http://[::1").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        let checked = match Url::parse(value) {
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse(RELATIVE_BASE_URL).and_then(|base| base.join(value))
            }
            other => other,
        };

        match checked {
            Ok(_) => Ok(Self(value.to_string())),
            Err(source) => Err(AtomError::InvalidUri {
                value: value.to_string(),
                source,
            }),
        }
    }

    /// The URI in its original lexical form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the reference has a scheme.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        Url::parse(&self.0).is_ok()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Uri {
    type Err = AtomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parse an RFC 3339 date-time (RFC 4287 §3.3).
///
/// # Examples
/// ```
/// use atomkit::scalar::parse_date;
///
/// let date = parse_date("2003-12-13T18:30:02Z").unwrap();
/// assert_eq!(date.to_rfc3339(), "2003-12-13T18:30:02+00:00");
/// assert!(parse_date("13 Dec 2003").is_err());
/// ```
pub fn parse_date(value: &str) -> Result<Timestamp> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value).map_err(|source| AtomError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

/// Format a timestamp for output.
#[must_use]
pub fn format_date(date: &Timestamp) -> String {
    date.to_rfc3339()
}

/// Parse a link `length` attribute (octets, non-negative).
pub fn parse_length(value: &str) -> Result<u64> {
    let value = value.trim();
    value.parse().map_err(|source| AtomError::InvalidLength {
        value: value.to_string(),
        source,
    })
}
