//! # PEPPOL
//!
//! Structured access to signed non-repudiation evidence, and resolution of
//! participants to the endpoints that receive documents for them.
//!
//! ## Overview
//!
//! Two independent components, with no shared runtime state:
//!
//! - **Evidence view**: wraps an externally parsed REM evidence (typed tree
//!   plus raw signed document) and answers "who sent this", "what was the
//!   outcome", "what was the payload digest" with typed, per-field errors.
//! - **Endpoint lookup**: maps a participant identifier to an endpoint URI
//!   through a [`Locator`] strategy chosen at configuration time.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use peppol::{Locator, Settings, SignedRemEvidence, StaticLocator};
//!
//! fn route(evidence: &SignedRemEvidence, settings: &Settings) -> Result<(), peppol::PeppolError> {
//!     let locator = StaticLocator::from_settings(settings)?;
//!
//!     let recipient = evidence.recipient_identifier()?;
//!     let endpoint = locator.lookup(&recipient)?;
//!     println!("{} ({:?}) -> {}", recipient, evidence.kind(), endpoint);
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `peppol::common` - Identifier value objects
//! - `peppol::evidence` - Evidence view
//! - `peppol::lookup` - Locators and settings

pub mod error;

// Re-export component crates
pub use peppol_common as common;
pub use peppol_evidence as evidence;
pub use peppol_lookup as lookup;

// Re-export main types for convenience
pub use error::{PeppolError, Result};

pub use peppol_common::{
    Blake3Hash, DocumentTypeIdentifier, InstanceIdentifier, ParticipantIdentifier, Scheme,
};
pub use peppol_evidence::{
    EventCode, EventReason, EvidenceError, EvidenceKind, EvidenceSummary, PeppolRemExtension,
    RemEvidence, SignedDocument, SignedRemEvidence,
};
pub use peppol_lookup::{
    Endpoint, Locator, LookupError, Settings, StaticLocator, Url, LOCATOR_HOSTNAME_KEY,
};
