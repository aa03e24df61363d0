//! The typed field tree of a REM evidence.
//!
//! Mirrors the evidence schema, in which almost nothing is guaranteed to be
//! present. Every field is an `Option` or a possibly-empty `Vec`; the view in
//! [`crate::evidence`] turns absence into typed errors.
//!
//! All types derive serde so an external parser (or a test fixture) can
//! build the tree from JSON.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Root of the typed evidence tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemEvidence {
    /// Schema version attribute.
    pub version: Option<String>,

    pub evidence_identifier: Option<String>,

    /// Outcome code URI.
    pub event_code: Option<String>,

    /// `None` when the reasons block is absent; `Some(vec![])` when empty.
    pub event_reasons: Option<Vec<EventReasonEntry>>,

    /// xsd:dateTime lexical form.
    pub event_time: Option<String>,

    pub evidence_issuer_policy_id: Option<Vec<String>>,

    pub evidence_issuer_details: Option<EntityDetails>,

    pub sender_details: Option<EntityDetails>,

    pub recipients_details: Option<Vec<EntityDetails>>,

    pub sender_message_details: Option<MessageDetails>,

    pub extensions: Option<Vec<Extension>>,
}

/// One entry of the event reasons list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventReasonEntry {
    pub code: Option<String>,
    pub details: Option<String>,
}

/// Identity block for an issuer, sender or recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityDetails {
    pub names_postal_addresses: Option<Vec<NamePostalAddress>>,

    /// Mixed list of attributed and plain electronic addresses, in document order.
    pub electronic_addresses: Vec<AddressEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamePostalAddress {
    pub entity_name: Option<EntityName>,
    pub postal_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityName {
    pub name: Vec<String>,
}

/// An entry of an electronic address list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AddressEntry {
    /// An address qualified by an identifier scheme.
    Attributed { scheme: String, value: String },
    /// A bare electronic address with no scheme.
    Plain { uri: String },
}

impl AddressEntry {
    /// Variant name, for error reporting.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Attributed { .. } => "attributed address",
            Self::Plain { .. } => "plain address",
        }
    }
}

/// Details of the message the evidence is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageDetails {
    /// Carries the document type identifier.
    pub message_subject: Option<String>,

    /// Identifier assigned by the sender's user agent.
    pub ua_message_identifier: Option<String>,

    /// Identifier assigned by the relaying access point.
    pub message_identifier_by_remmd: Option<String>,

    /// Digest algorithm URI.
    pub digest_method: Option<String>,

    /// Digest of the transmitted payload. Opaque.
    pub digest_value: Option<Bytes>,
}

/// A generic extension element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extension {
    pub content: Vec<ExtensionContent>,
}

/// Mixed content of an [`Extension`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ExtensionContent {
    /// The typed `any` wrapper.
    Any(AnyContainer),
    /// Character data between elements.
    Text(String),
}

impl ExtensionContent {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Any(_) => "any wrapper",
            Self::Text(_) => "text",
        }
    }
}

/// Contents of the `any` wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnyContainer {
    pub content: Vec<AnyItem>,
}

/// An item inside the `any` wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AnyItem {
    TransmissionEvidence(PeppolRemExtension),
    Text(String),
    /// An element the model does not know, by qualified name.
    Element { name: String },
}

impl AnyItem {
    pub fn variant_name(&self) -> String {
        match self {
            Self::TransmissionEvidence(_) => "transmission evidence".to_string(),
            Self::Text(_) => "text".to_string(),
            Self::Element { name } => format!("element {}", name),
        }
    }
}

/// The PEPPOL transmission evidence embedded in a REM extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeppolRemExtension {
    pub transmission_role: Option<TransmissionRole>,

    /// Receipts from the underlying transport, in the order received.
    pub original_receipts: Vec<OriginalReceipt>,
}

/// Position of the issuing access point in the four-corner model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransmissionRole {
    /// Sending access point.
    C2,
    /// Receiving access point.
    C3,
}

/// A transport-level receipt, kept as opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalReceipt {
    pub content_type: String,
    pub content: Bytes,
}
