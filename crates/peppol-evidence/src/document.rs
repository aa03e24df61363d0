//! The raw signed document and its classification.
//!
//! [`SignedDocument`] holds the exact bytes a signature was computed over.
//! Nothing in this crate writes to it. Signature validation operates on
//! these bytes alone and lives outside this crate.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

use peppol_common::Blake3Hash;

/// Namespace of the REM evidence schema.
pub const REM_NAMESPACE: &str = "http://uri.etsi.org/02640/v2#";

/// Qualified name of an XML element, as reported by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementName {
    pub namespace: Option<String>,
    pub local_name: String,
}

impl ElementName {
    pub fn new(namespace: Option<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace,
            local_name: local_name.into(),
        }
    }

    /// An element in the REM evidence namespace.
    pub fn rem(local_name: impl Into<String>) -> Self {
        Self::new(Some(REM_NAMESPACE.to_string()), local_name)
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local_name),
            None => f.write_str(&self.local_name),
        }
    }
}

/// The original signed evidence document.
///
/// `document_element` is `None` when the parser found no root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedDocument {
    bytes: Bytes,
    document_element: Option<ElementName>,
}

impl SignedDocument {
    /// Wrap bytes and the root element name produced by the same parse.
    pub fn new(bytes: impl Into<Bytes>, document_element: Option<ElementName>) -> Self {
        Self {
            bytes: bytes.into(),
            document_element,
        }
    }

    /// The signed bytes, exactly as received.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn document_element(&self) -> Option<&ElementName> {
        self.document_element.as_ref()
    }

    /// Blake3 hash of the signed bytes.
    pub fn fingerprint(&self) -> Blake3Hash {
        Blake3Hash::hash(&self.bytes)
    }
}

/// Kind of evidence, derived from the document element's local name.
///
/// Classification is advisory: it picks kind-specific processing and never
/// fails. Unrecognized or absent roots become [`EvidenceKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvidenceKind {
    /// Proof of delivery or non-delivery to the recipient.
    DeliveryNonDeliveryToRecipient,
    /// Proof of relay acceptance or rejection by an access point.
    RelayRemMdAcceptanceRejection,
    Unknown,
}

impl EvidenceKind {
    /// Kinds with a schema element.
    pub const KNOWN: [Self; 2] = [
        Self::DeliveryNonDeliveryToRecipient,
        Self::RelayRemMdAcceptanceRejection,
    ];

    /// Classify a document element local name. Matching is exact.
    pub fn from_local_name(name: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|kind| kind.local_name() == Some(name))
            .unwrap_or(Self::Unknown)
    }

    /// Classify a document by its root element, if any.
    pub fn classify(document: &SignedDocument) -> Self {
        document
            .document_element()
            .map(|root| Self::from_local_name(&root.local_name))
            .unwrap_or(Self::Unknown)
    }

    /// The schema's local element name, or `None` for `Unknown`.
    pub fn local_name(self) -> Option<&'static str> {
        match self {
            Self::DeliveryNonDeliveryToRecipient => Some("DeliveryNonDeliveryToRecipient"),
            Self::RelayRemMdAcceptanceRejection => Some("RelayREMMDAcceptanceRejection"),
            Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_roots() {
        let doc = SignedDocument::new(
            b"<DeliveryNonDeliveryToRecipient/>".to_vec(),
            Some(ElementName::rem("DeliveryNonDeliveryToRecipient")),
        );
        assert_eq!(
            EvidenceKind::classify(&doc),
            EvidenceKind::DeliveryNonDeliveryToRecipient
        );

        let doc = SignedDocument::new(
            b"<RelayREMMDAcceptanceRejection/>".to_vec(),
            Some(ElementName::rem("RelayREMMDAcceptanceRejection")),
        );
        assert_eq!(
            EvidenceKind::classify(&doc),
            EvidenceKind::RelayRemMdAcceptanceRejection
        );
    }

    #[test]
    fn test_classify_unknown_and_absent() {
        let doc = SignedDocument::new(b"<Other/>".to_vec(), Some(ElementName::new(None, "Other")));
        assert_eq!(EvidenceKind::classify(&doc), EvidenceKind::Unknown);

        let empty = SignedDocument::new(Bytes::new(), None);
        assert_eq!(EvidenceKind::classify(&empty), EvidenceKind::Unknown);

        // Case matters.
        assert_eq!(
            EvidenceKind::from_local_name("relayREMMDAcceptanceRejection"),
            EvidenceKind::Unknown
        );
    }

    #[test]
    fn test_local_name_matches_classification() {
        for kind in EvidenceKind::KNOWN {
            let name = kind.local_name().unwrap();
            assert_eq!(EvidenceKind::from_local_name(name), kind);
        }
        assert_eq!(EvidenceKind::Unknown.local_name(), None);
    }

    #[test]
    fn test_fingerprint_tracks_bytes() {
        let a = SignedDocument::new(b"<a/>".to_vec(), None);
        let b = SignedDocument::new(b"<a/>".to_vec(), Some(ElementName::new(None, "a")));
        let c = SignedDocument::new(b"<b/>".to_vec(), None);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_element_name_display() {
        assert_eq!(ElementName::new(None, "x").to_string(), "x");
        assert_eq!(
            ElementName::rem("Root").to_string(),
            "{http://uri.etsi.org/02640/v2#}Root"
        );
    }
}
