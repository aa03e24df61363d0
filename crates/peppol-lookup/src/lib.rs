//! # PEPPOL Lookup
//!
//! Resolves a participant identifier to the endpoint of the service that
//! receives documents on the participant's behalf.
//!
//! ## Overview
//!
//! Resolution strategies implement the [`Locator`] trait. This crate ships
//! [`StaticLocator`], which returns one configured endpoint for every
//! participant. Network-based strategies (DNS/SML discovery) are expected to
//! be added as further implementations of the same trait.
//!
//! ## Usage
//!
//! ```rust
//! use peppol_common::ParticipantIdentifier;
//! use peppol_lookup::{Locator, Settings, StaticLocator, LOCATOR_HOSTNAME_KEY};
//!
//! let settings = Settings::builder()
//!     .set(LOCATOR_HOSTNAME_KEY, "https://ap.example.org/as4")
//!     .build();
//! let locator = StaticLocator::from_settings(&settings).unwrap();
//!
//! let participant = ParticipantIdentifier::with_default_scheme("9908:987654321");
//! let endpoint = locator.lookup(&participant).unwrap();
//! assert_eq!(endpoint.as_str(), "https://ap.example.org/as4");
//! ```
//!
//! ## Design Notes
//!
//! - **Fail at construction**: a malformed endpoint is rejected when the
//!   locator is built, never during `lookup`.
//! - **Verbatim endpoints**: [`Endpoint`] returns the configured text
//!   unchanged. Text that would need percent-encoding is rejected.
//! - **No hidden state**: `lookup` is a function of the identifier and the
//!   locator's immutable state. No caching, no retries.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod locator;
pub mod static_locator;

pub use config::{ConfigError, Settings, SettingsBuilder, LOCATOR_HOSTNAME_KEY};
pub use endpoint::Endpoint;
pub use error::{LookupError, Result};
pub use locator::Locator;
pub use static_locator::StaticLocator;

/// Re-exported for [`Endpoint::url`] and [`StaticLocator::from_url`].
pub use url::Url;
