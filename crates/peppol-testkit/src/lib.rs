//! # PEPPOL Testkit
//!
//! Testing utilities for the PEPPOL evidence and lookup crates.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: an evidence builder producing matched typed/raw pairs,
//!   standing in for the external parser
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Test Fixtures
//!
//! ```rust
//! use peppol_testkit::fixtures::{attributed_with, EvidenceFixture};
//!
//! let evidence = EvidenceFixture::delivery()
//!     .sender_addresses(vec![attributed_with("A", "X"), attributed_with("B", "Y")])
//!     .build();
//! assert_eq!(evidence.sender_identifier().unwrap().value(), "X");
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use peppol_testkit::generators::{evidence_from_params, EvidenceParams};
//!
//! proptest! {
//!     #[test]
//!     fn first_reason_wins(params: EvidenceParams) {
//!         let evidence = evidence_from_params(&params);
//!         prop_assert_eq!(evidence.event_reason().unwrap(), params.first_reason);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{static_locator, EvidenceFixture};
pub use generators::{evidence_from_params, EvidenceParams};
