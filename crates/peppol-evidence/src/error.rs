//! Error types for evidence accessors.

use serde::Serialize;
use thiserror::Error;

/// Errors returned by [`SignedRemEvidence`](crate::SignedRemEvidence) accessors.
///
/// Each variant names the field path that failed, so an audit trail can tell
/// "never populated" apart from "present but unparsable" and "unexpected variant".
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum EvidenceError {
    /// A required link in the nested field path is absent or an empty list.
    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    /// A code was present but is not a member of its closed set.
    #[error("unknown code in {field}: {code}")]
    UnknownCode { field: &'static str, code: String },

    /// A nested value was present but of an unexpected variant.
    #[error("type mismatch in {field}: expected {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    /// A value was present but could not be interpreted.
    #[error("malformed value in {field}: {reason}")]
    MalformedValue { field: &'static str, reason: String },
}

impl EvidenceError {
    pub(crate) fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Whether this error means the field was never populated.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}

/// Result type for evidence accessors.
pub type Result<T> = std::result::Result<T, EvidenceError>;
