//! # PEPPOL Common
//!
//! Value objects shared by the evidence and lookup crates.
//!
//! This crate contains no I/O and no parsing of documents. It only defines
//! the identifiers that flow between components.
//!
//! ## Key Types
//!
//! - [`ParticipantIdentifier`] - A business party, as `(scheme, value)`
//! - [`DocumentTypeIdentifier`] - The type of a business document
//! - [`InstanceIdentifier`] - Identifier of one transmitted message
//! - [`Scheme`] - Identifier scheme tag
//! - [`Blake3Hash`] - Fingerprint of raw bytes

pub mod error;
pub mod fingerprint;
pub mod identifier;

pub use error::IdentifierError;
pub use fingerprint::Blake3Hash;
pub use identifier::{DocumentTypeIdentifier, InstanceIdentifier, ParticipantIdentifier, Scheme};
