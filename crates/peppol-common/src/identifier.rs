//! Strong type definitions for PEPPOL identifiers.
//!
//! All identifiers are newtypes to prevent misuse at compile time. A
//! participant can never be passed where a document type is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::IdentifierError;

/// Separator between scheme and value in the textual form `scheme::value`.
pub const SCHEME_SEPARATOR: &str = "::";

/// An identifier scheme tag, such as `iso6523-actorid-upis`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Scheme(String);

impl Scheme {
    /// Scheme used for participant identifiers in the PEPPOL network.
    pub const PARTICIPANT_DEFAULT: &'static str = "iso6523-actorid-upis";

    /// Scheme used for document type identifiers in the PEPPOL network.
    pub const DOCUMENT_TYPE_DEFAULT: &'static str = "busdox-docid-qns";

    /// Create a scheme from its tag.
    pub fn of(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    /// The scheme tag.
    pub fn identifier(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A business party in the exchange network, as a `(scheme, value)` pair.
///
/// Values are kept exactly as given. Evidence accessors return what the
/// signed document says, without case folding or trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantIdentifier {
    scheme: Scheme,
    value: String,
}

impl ParticipantIdentifier {
    /// Create a participant identifier under the given scheme.
    pub fn of(value: impl Into<String>, scheme: Scheme) -> Self {
        Self {
            scheme,
            value: value.into(),
        }
    }

    /// Create a participant identifier under the default PEPPOL scheme.
    pub fn with_default_scheme(value: impl Into<String>) -> Self {
        Self::of(value, Scheme::of(Scheme::PARTICIPANT_DEFAULT))
    }

    /// Parse the textual form `scheme::value`.
    pub fn parse(s: &str) -> Result<Self, IdentifierError> {
        let (scheme, value) = split_scheme(s)?;
        Ok(Self::of(value, Scheme::of(scheme)))
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParticipantIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.scheme, SCHEME_SEPARATOR, self.value)
    }
}

/// The type of a business document, e.g. a UBL invoice customization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentTypeIdentifier {
    scheme: Scheme,
    value: String,
}

impl DocumentTypeIdentifier {
    /// Create a document type identifier under the default PEPPOL scheme.
    pub fn of(value: impl Into<String>) -> Self {
        Self::with_scheme(value, Scheme::of(Scheme::DOCUMENT_TYPE_DEFAULT))
    }

    /// Create a document type identifier under an explicit scheme.
    pub fn with_scheme(value: impl Into<String>, scheme: Scheme) -> Self {
        Self {
            scheme,
            value: value.into(),
        }
    }

    /// Parse the textual form `scheme::value`.
    pub fn parse(s: &str) -> Result<Self, IdentifierError> {
        let (scheme, value) = split_scheme(s)?;
        Ok(Self::with_scheme(value, Scheme::of(scheme)))
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for DocumentTypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.scheme, SCHEME_SEPARATOR, self.value)
    }
}

/// Identifier of a single transmitted message instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceIdentifier(String);

impl InstanceIdentifier {
    pub fn of(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split `scheme::value` at the first separator.
fn split_scheme(s: &str) -> Result<(&str, &str), IdentifierError> {
    let (scheme, value) = s
        .split_once(SCHEME_SEPARATOR)
        .ok_or_else(|| IdentifierError::MissingSeparator(s.to_string()))?;
    if scheme.is_empty() {
        return Err(IdentifierError::EmptyScheme);
    }
    if value.is_empty() {
        return Err(IdentifierError::EmptyValue);
    }
    Ok((scheme, value))
}
