//! Error types for identifier parsing.

use thiserror::Error;

/// Errors that can occur when parsing an identifier from its string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("identifier is missing the '::' scheme separator: {0}")]
    MissingSeparator(String),

    #[error("identifier scheme is empty")]
    EmptyScheme,

    #[error("identifier value is empty")]
    EmptyValue,
}
