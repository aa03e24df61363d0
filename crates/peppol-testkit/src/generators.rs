//! Proptest generators for property-based testing.

use proptest::prelude::*;

use peppol_common::{ParticipantIdentifier, Scheme};
use peppol_evidence::{AddressEntry, EventCode, EventReason, SignedRemEvidence};

use crate::fixtures::{attributed_with, plain, EvidenceFixture};

/// Generate an identifier scheme tag.
pub fn scheme() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,23}".prop_map(String::from)
}

/// Generate a participant value in ICD:identifier form.
pub fn participant_value() -> impl Strategy<Value = String> {
    ("[0-9]{4}", "[A-Za-z0-9]{1,20}").prop_map(|(icd, id)| format!("{}:{}", icd, id))
}

/// Generate a participant identifier.
pub fn participant_identifier() -> impl Strategy<Value = ParticipantIdentifier> {
    (scheme(), participant_value()).prop_map(|(s, v)| ParticipantIdentifier::of(v, Scheme::of(s)))
}

/// Generate an attributed address entry.
pub fn attributed_address() -> impl Strategy<Value = AddressEntry> {
    (scheme(), participant_value()).prop_map(|(s, v)| attributed_with(&s, &v))
}

/// Generate any address entry, attributed or plain.
pub fn address_entry() -> impl Strategy<Value = AddressEntry> {
    prop_oneof![
        3 => attributed_address(),
        1 => "[a-z]{1,10}@example\\.org".prop_map(|m| plain(&format!("mailto:{}", m))),
    ]
}

/// Generate an event reason.
pub fn event_reason() -> impl Strategy<Value = EventReason> {
    proptest::sample::select(EventReason::ALL.to_vec())
}

/// Generate an event code.
pub fn event_code() -> impl Strategy<Value = EventCode> {
    proptest::sample::select(EventCode::ALL.to_vec())
}

/// Generate a string that is not a known reason code.
pub fn junk_code() -> impl Strategy<Value = String> {
    "[a-z:/#_]{0,30}".prop_filter("must not be a known code", |s| {
        EventReason::from_code(s).is_none()
    })
}

/// Parameters for generating an evidence.
#[derive(Debug, Clone)]
pub struct EvidenceParams {
    pub evidence_identifier: String,
    pub event_code: EventCode,
    pub first_reason: EventReason,
    pub trailing_reasons: Vec<String>,
    pub sender: AddressEntry,
    pub trailing_sender: Vec<AddressEntry>,
    pub digest: Vec<u8>,
}

impl Arbitrary for EvidenceParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            "[a-f0-9-]{8,36}",
            event_code(),
            event_reason(),
            prop::collection::vec(junk_code(), 0..4),
            attributed_address(),
            prop::collection::vec(address_entry(), 0..4),
            prop::collection::vec(any::<u8>(), 0..64),
        )
            .prop_map(
                |(id, code, reason, trailing_reasons, sender, trailing_sender, digest)| {
                    EvidenceParams {
                        evidence_identifier: id,
                        event_code: code,
                        first_reason: reason,
                        trailing_reasons,
                        sender,
                        trailing_sender,
                        digest,
                    }
                },
            )
            .boxed()
    }
}

/// Generate an evidence from parameters.
pub fn evidence_from_params(params: &EvidenceParams) -> SignedRemEvidence {
    let mut reasons = vec![params.first_reason.code()];
    reasons.extend(params.trailing_reasons.iter().cloned());
    let reasons: Vec<&str> = reasons.iter().map(String::as_str).collect();

    let mut addresses = vec![params.sender.clone()];
    addresses.extend(params.trailing_sender.iter().cloned());

    let digest = params.digest.clone();
    EvidenceFixture::relay_rejection()
        .reasons(&reasons)
        .sender_addresses(addresses)
        .with(|t| {
            t.evidence_identifier = Some(params.evidence_identifier.clone());
            t.event_code = Some(params.event_code.code());
            if let Some(details) = t.sender_message_details.as_mut() {
                details.digest_value = Some(digest.into());
            }
        })
        .build()
}
