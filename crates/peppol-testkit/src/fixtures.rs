//! Test fixtures and helpers.
//!
//! [`EvidenceFixture`] builds a typed tree and a matching signed document,
//! standing in for the external parser.

use bytes::Bytes;

use peppol_common::Scheme;
use peppol_evidence::{
    AddressEntry, AnyContainer, AnyItem, ElementName, EntityDetails, EntityName, EventCode,
    EventReason, EventReasonEntry, Extension, ExtensionContent, MessageDetails,
    NamePostalAddress, OriginalReceipt, PeppolRemExtension, RemEvidence, SignedDocument,
    SignedRemEvidence, TransmissionRole,
};
use peppol_lookup::{Settings, StaticLocator, LOCATOR_HOSTNAME_KEY};

pub const SENDER: &str = "9908:810017902";
pub const RECIPIENT: &str = "9908:810418052";
pub const DOCUMENT_TYPE: &str =
    "urn:oasis:names:specification:ubl:schema:xsd:Invoice-2::Invoice##urn:www.cenbii.eu:transaction:biitrns010:ver2.0::2.1";
pub const ISSUER_NAME: &str = "Test Access Point AS";
pub const POLICY_ID: &str = "http://uri.etsi.org/REM/Policy#Default";
pub const DIGEST_METHOD: &str = "http://www.w3.org/2001/04/xmlenc#sha256";
pub const ENDPOINT: &str = "https://ap.example.org/as4";

/// Builder for a matched `(RemEvidence, SignedDocument)` pair.
#[derive(Debug, Clone)]
pub struct EvidenceFixture {
    root: Option<ElementName>,
    typed: RemEvidence,
}

impl EvidenceFixture {
    /// A fully populated delivery evidence with transmission evidence attached.
    pub fn delivery() -> Self {
        let typed = RemEvidence {
            version: Some("2".into()),
            evidence_identifier: Some("5f3c1a2e-delivery".into()),
            event_code: Some(EventCode::Delivery.code()),
            event_reasons: None,
            event_time: Some("2017-03-01T12:00:00.000+01:00".into()),
            evidence_issuer_policy_id: Some(vec![POLICY_ID.into()]),
            evidence_issuer_details: Some(EntityDetails {
                names_postal_addresses: Some(vec![NamePostalAddress {
                    entity_name: Some(EntityName {
                        name: vec![ISSUER_NAME.into()],
                    }),
                    postal_address: None,
                }]),
                electronic_addresses: vec![],
            }),
            sender_details: Some(entity(vec![attributed(SENDER)])),
            recipients_details: Some(vec![entity(vec![attributed(RECIPIENT)])]),
            sender_message_details: Some(MessageDetails {
                message_subject: Some(DOCUMENT_TYPE.into()),
                ua_message_identifier: Some("ua-msg-0001".into()),
                message_identifier_by_remmd: Some("remmd-msg-0001@ap.example.org".into()),
                digest_method: Some(DIGEST_METHOD.into()),
                digest_value: Some(Bytes::from_static(&[0x5a; 32])),
            }),
            extensions: Some(vec![transmission_extension(TransmissionRole::C3)]),
        };
        Self {
            root: Some(ElementName::rem("DeliveryNonDeliveryToRecipient")),
            typed,
        }
    }

    /// A relay rejection evidence with one reason.
    pub fn relay_rejection() -> Self {
        let mut fixture = Self::delivery()
            .root("RelayREMMDAcceptanceRejection")
            .reasons(&[EventReason::InvalidUserSignature.code().as_str()]);
        fixture.typed.evidence_identifier = Some("5f3c1a2e-rejection".into());
        fixture.typed.event_code = Some(EventCode::Rejection.code());
        fixture.typed.extensions = Some(vec![transmission_extension(TransmissionRole::C2)]);
        fixture
    }

    /// A typed tree with nothing populated.
    pub fn empty() -> Self {
        Self {
            root: None,
            typed: RemEvidence::default(),
        }
    }

    /// Set the document element local name (REM namespace).
    pub fn root(mut self, local_name: &str) -> Self {
        self.root = Some(ElementName::rem(local_name));
        self
    }

    /// Remove the document element.
    pub fn no_root(mut self) -> Self {
        self.root = None;
        self
    }

    /// Replace the reasons list with the given codes, in order.
    pub fn reasons(mut self, codes: &[&str]) -> Self {
        self.typed.event_reasons = Some(
            codes
                .iter()
                .map(|code| EventReasonEntry {
                    code: Some(code.to_string()),
                    details: None,
                })
                .collect(),
        );
        self
    }

    pub fn policy_ids(mut self, ids: &[&str]) -> Self {
        self.typed.evidence_issuer_policy_id = Some(ids.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn sender_addresses(mut self, addresses: Vec<AddressEntry>) -> Self {
        self.typed.sender_details = Some(entity(addresses));
        self
    }

    /// Replace the recipients list with one recipient holding these addresses.
    pub fn recipient_addresses(mut self, addresses: Vec<AddressEntry>) -> Self {
        self.typed.recipients_details = Some(vec![entity(addresses)]);
        self
    }

    pub fn extensions(mut self, extensions: Vec<Extension>) -> Self {
        self.typed.extensions = Some(extensions);
        self
    }

    /// Apply an arbitrary edit to the typed tree.
    pub fn with(mut self, edit: impl FnOnce(&mut RemEvidence)) -> Self {
        edit(&mut self.typed);
        self
    }

    pub fn typed(&self) -> &RemEvidence {
        &self.typed
    }

    /// A signed document standing in for the parsed XML.
    ///
    /// The bytes are the JSON form of the typed tree behind the root name,
    /// so two fixtures differing in any field have different fingerprints.
    pub fn document(&self) -> SignedDocument {
        let mut bytes = self
            .root
            .as_ref()
            .map(|r| r.to_string().into_bytes())
            .unwrap_or_default();
        bytes.extend(serde_json::to_vec(&self.typed).expect("typed tree serializes"));
        SignedDocument::new(bytes, self.root.clone())
    }

    pub fn build(&self) -> SignedRemEvidence {
        SignedRemEvidence::new(self.typed.clone(), self.document())
    }
}

impl Default for EvidenceFixture {
    fn default() -> Self {
        Self::delivery()
    }
}

/// An attributed address under the default participant scheme.
pub fn attributed(value: &str) -> AddressEntry {
    attributed_with(Scheme::PARTICIPANT_DEFAULT, value)
}

pub fn attributed_with(scheme: &str, value: &str) -> AddressEntry {
    AddressEntry::Attributed {
        scheme: scheme.into(),
        value: value.into(),
    }
}

pub fn plain(uri: &str) -> AddressEntry {
    AddressEntry::Plain { uri: uri.into() }
}

pub fn entity(addresses: Vec<AddressEntry>) -> EntityDetails {
    EntityDetails {
        names_postal_addresses: None,
        electronic_addresses: addresses,
    }
}

/// An extension with the expected wrapper around a transmission evidence.
pub fn transmission_extension(role: TransmissionRole) -> Extension {
    Extension {
        content: vec![ExtensionContent::Any(AnyContainer {
            content: vec![AnyItem::TransmissionEvidence(PeppolRemExtension {
                transmission_role: Some(role),
                original_receipts: vec![OriginalReceipt {
                    content_type: "application/xml".into(),
                    content: Bytes::from_static(b"<Receipt/>"),
                }],
            })],
        })],
    }
}

/// A static locator pointing at [`ENDPOINT`], built through settings.
pub fn static_locator() -> StaticLocator {
    let settings = Settings::builder()
        .set(LOCATOR_HOSTNAME_KEY, ENDPOINT)
        .build();
    StaticLocator::from_settings(&settings).expect("fixture endpoint is valid")
}
