//! Error types for the lookup module.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while building a locator or resolving an endpoint.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Locator construction received a missing or malformed endpoint.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No endpoint is registered for the participant.
    #[error("participant not found: {0}")]
    NotFound(String),

    /// The lookup could not reach its registry.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The lookup did not complete in time.
    #[error("timeout: {0}")]
    Timeout(String),
}

impl LookupError {
    /// Whether this error was raised while building a locator.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}

impl From<ConfigError> for LookupError {
    fn from(e: ConfigError) -> Self {
        LookupError::InvalidConfiguration(e.to_string())
    }
}

/// Result type for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
