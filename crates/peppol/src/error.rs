//! Error types spanning both components.

use peppol_common::IdentifierError;
use peppol_evidence::EvidenceError;
use peppol_lookup::{ConfigError, LookupError};
use thiserror::Error;

/// Errors from any PEPPOL component.
#[derive(Debug, Error)]
pub enum PeppolError {
    /// Evidence accessor error.
    #[error("evidence error: {0}")]
    Evidence(#[from] EvidenceError),

    /// Locator construction or lookup error.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Settings could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed identifier string.
    #[error("identifier error: {0}")]
    Identifier(#[from] IdentifierError),
}

/// Result type spanning both components.
pub type Result<T> = std::result::Result<T, PeppolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_keep_source_message() {
        let e: PeppolError = EvidenceError::MissingField { field: "event_time" }.into();
        assert_eq!(e.to_string(), "evidence error: missing field: event_time");

        let e: PeppolError =
            LookupError::InvalidConfiguration("endpoint URI is empty".into()).into();
        assert!(matches!(e, PeppolError::Lookup(LookupError::InvalidConfiguration(_))));

        let e: PeppolError = ConfigError::Missing("lookup.locator.hostname".into()).into();
        assert_eq!(
            e.to_string(),
            "configuration error: missing setting: lookup.locator.hostname"
        );
    }
}
