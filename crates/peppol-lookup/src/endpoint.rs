//! Endpoint: a validated endpoint URI, kept exactly as configured.

use std::fmt;

use url::Url;

use crate::error::{LookupError, Result};

/// Characters RFC 3986 allows to appear literally in a URI.
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=%".contains(c)
}

/// The endpoint of a receiving service.
///
/// The text is returned verbatim. `url` is the parsed form used for
/// validation and for callers that need components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    raw: String,
    url: Url,
}

impl Endpoint {
    /// Validate an endpoint string.
    ///
    /// Fails with `InvalidConfiguration` if the string is empty, contains a
    /// character that would need percent-encoding, does not parse as an
    /// absolute URI, or has no host.
    pub fn parse(uri: &str) -> Result<Self> {
        if uri.is_empty() {
            return Err(LookupError::InvalidConfiguration(
                "endpoint URI is empty".into(),
            ));
        }

        if let Some(c) = uri.chars().find(|c| !is_uri_char(*c)) {
            return Err(LookupError::InvalidConfiguration(format!(
                "endpoint URI {:?} contains {:?}, which must be percent-encoded",
                uri, c
            )));
        }

        let url = Url::parse(uri).map_err(|e| {
            LookupError::InvalidConfiguration(format!("endpoint URI {:?}: {}", uri, e))
        })?;

        Self::checked(uri.to_string(), url)
    }

    /// Wrap an already-parsed URL. Its serialization becomes the text.
    pub fn from_url(url: Url) -> Result<Self> {
        Self::checked(url.as_str().to_string(), url)
    }

    fn checked(raw: String, url: Url) -> Result<Self> {
        if url.host_str().map_or(true, str::is_empty) {
            return Err(LookupError::InvalidConfiguration(format!(
                "endpoint URI {:?} has no host",
                raw
            )));
        }
        Ok(Self { raw, url })
    }

    /// The endpoint exactly as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed form, for scheme/host/port access.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
