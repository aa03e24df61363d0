//! # PEPPOL Evidence
//!
//! Read-only access to signed REM (Registered Electronic Mail) evidence.
//!
//! A signed evidence record is held in two representations at once:
//!
//! - [`RemEvidence`] - the typed field tree, for answering semantic questions
//! - [`SignedDocument`] - the raw signed bytes, never mutated
//!
//! Both are produced together by an external parser and handed to
//! [`SignedRemEvidence::new`]. This crate never parses, never verifies
//! signatures, and never tries to reconcile the two representations.
//!
//! ## Key Types
//!
//! - [`SignedRemEvidence`] - The view; every accessor is independently fallible
//! - [`EvidenceKind`] - Classification by document element name
//! - [`EventCode`] / [`EventReason`] - Closed code sets from the REM schema
//! - [`PeppolRemExtension`] - The transmission evidence carried in extensions
//! - [`EvidenceError`] - Typed failure per accessor

pub mod codes;
pub mod document;
pub mod error;
pub mod evidence;
pub mod model;
pub mod summary;

pub use codes::{EventCode, EventReason};
pub use document::{ElementName, EvidenceKind, SignedDocument};
pub use error::{EvidenceError, Result};
pub use evidence::SignedRemEvidence;
pub use model::{
    AddressEntry, AnyContainer, AnyItem, EntityDetails, EntityName, EventReasonEntry, Extension,
    ExtensionContent, MessageDetails, NamePostalAddress, OriginalReceipt, PeppolRemExtension,
    RemEvidence, TransmissionRole,
};
pub use summary::EvidenceSummary;
