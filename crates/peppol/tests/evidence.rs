//! Integration tests for the evidence view, through the public API only.

use peppol::evidence::{AnyContainer, AnyItem, Extension, ExtensionContent, TransmissionRole};
use peppol::{
    DocumentTypeIdentifier, EventCode, EventReason, EvidenceError, EvidenceKind,
    InstanceIdentifier, ParticipantIdentifier, Scheme,
};
use peppol_testkit::fixtures::{
    attributed_with, plain, EvidenceFixture, DIGEST_METHOD, DOCUMENT_TYPE, ISSUER_NAME, RECIPIENT,
    SENDER,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn kind_follows_document_element() {
    let delivery = EvidenceFixture::delivery().build();
    assert_eq!(delivery.kind(), EvidenceKind::DeliveryNonDeliveryToRecipient);

    let relay = EvidenceFixture::delivery()
        .root("RelayREMMDAcceptanceRejection")
        .build();
    assert_eq!(relay.kind(), EvidenceKind::RelayRemMdAcceptanceRejection);

    let other = EvidenceFixture::delivery().root("SubmissionAcceptanceRejection").build();
    assert_eq!(other.kind(), EvidenceKind::Unknown);

    let absent = EvidenceFixture::delivery().no_root().build();
    assert_eq!(absent.kind(), EvidenceKind::Unknown);
}

#[test]
fn classification_ignores_typed_tree() {
    // Kind comes from the signed document only.
    let evidence = EvidenceFixture::empty()
        .root("DeliveryNonDeliveryToRecipient")
        .build();
    assert_eq!(evidence.kind(), EvidenceKind::DeliveryNonDeliveryToRecipient);
    assert!(evidence.evidence_identifier().is_err());
}

#[test]
fn full_delivery_evidence() {
    init_tracing();
    let evidence = EvidenceFixture::delivery().build();

    assert_eq!(evidence.evidence_identifier().unwrap(), "5f3c1a2e-delivery");
    assert_eq!(evidence.event_code().unwrap(), EventCode::Delivery);
    assert_eq!(evidence.event_time().unwrap().to_rfc3339(), "2017-03-01T11:00:00+00:00");
    assert_eq!(evidence.issuer_details().unwrap(), ISSUER_NAME);
    assert_eq!(
        evidence.sender_identifier().unwrap(),
        ParticipantIdentifier::with_default_scheme(SENDER)
    );
    assert_eq!(
        evidence.recipient_identifier().unwrap(),
        ParticipantIdentifier::with_default_scheme(RECIPIENT)
    );
    assert_eq!(
        evidence.document_type_identifier().unwrap(),
        DocumentTypeIdentifier::of(DOCUMENT_TYPE)
    );
    assert_eq!(evidence.document_type_instance_identifier().unwrap(), "ua-msg-0001");
    assert_eq!(
        evidence.instance_identifier().unwrap(),
        InstanceIdentifier::of("remmd-msg-0001@ap.example.org")
    );
    assert_eq!(evidence.payload_digest().unwrap(), &[0x5a; 32][..]);
    assert_eq!(evidence.payload_digest_method().unwrap(), DIGEST_METHOD);
    assert_eq!(
        evidence.extension_payload().unwrap().transmission_role,
        Some(TransmissionRole::C3)
    );

    // Positive outcome: the reasons block is legitimately absent.
    assert!(evidence.event_reason().unwrap_err().is_missing());
}

#[test]
fn event_reason_uses_first_entry_only() {
    let evidence = EvidenceFixture::relay_rejection()
        .reasons(&[
            EventReason::MessageSizeExceeded.code().as_str(),
            EventReason::MalwareFound.code().as_str(),
        ])
        .build();
    assert_eq!(evidence.event_reason().unwrap(), EventReason::MessageSizeExceeded);

    let second_invalid = EvidenceFixture::relay_rejection()
        .reasons(&[EventReason::MalwareFound.code().as_str(), "not-a-code"])
        .build();
    assert_eq!(second_invalid.event_reason().unwrap(), EventReason::MalwareFound);

    let first_invalid = EvidenceFixture::relay_rejection()
        .reasons(&["not-a-code", EventReason::MalwareFound.code().as_str()])
        .build();
    assert_eq!(
        first_invalid.event_reason(),
        Err(EvidenceError::UnknownCode {
            field: "event_reasons[0].code",
            code: "not-a-code".into()
        })
    );
}

#[test]
fn unknown_event_code_is_not_defaulted() {
    let evidence = EvidenceFixture::delivery()
        .with(|t| t.event_code = Some("http://uri.etsi.org/02640/Event#Teleported".into()))
        .build();
    assert!(matches!(
        evidence.event_code(),
        Err(EvidenceError::UnknownCode { field: "event_code", .. })
    ));
}

#[test]
fn extension_payload_failures() {
    init_tracing();

    let empty = EvidenceFixture::delivery().extensions(vec![]).build();
    assert!(empty.extension_payload().unwrap_err().is_missing());

    let absent = EvidenceFixture::delivery().with(|t| t.extensions = None).build();
    assert_eq!(
        absent.extension_payload(),
        Err(EvidenceError::MissingField { field: "extensions" })
    );

    let wrong_shape = EvidenceFixture::delivery()
        .extensions(vec![Extension {
            content: vec![ExtensionContent::Text("unexpected".into())],
        }])
        .build();
    assert!(matches!(
        wrong_shape.extension_payload(),
        Err(EvidenceError::TypeMismatch { .. })
    ));

    let foreign_payload = EvidenceFixture::delivery()
        .extensions(vec![Extension {
            content: vec![ExtensionContent::Any(AnyContainer {
                content: vec![AnyItem::Element {
                    name: "{urn:example}Other".into(),
                }],
            })],
        }])
        .build();
    assert!(matches!(
        foreign_payload.extension_payload(),
        Err(EvidenceError::TypeMismatch { .. })
    ));
}

#[test]
fn only_first_extension_is_considered() {
    let evidence = EvidenceFixture::delivery()
        .extensions(vec![
            Extension::default(),
            peppol_testkit::fixtures::transmission_extension(TransmissionRole::C2),
        ])
        .build();
    assert!(evidence.extension_payload().unwrap_err().is_missing());
}

#[test]
fn first_address_wins_for_sender_and_recipient() {
    let addresses = vec![attributed_with("A", "X"), attributed_with("B", "Y")];
    let evidence = EvidenceFixture::delivery()
        .sender_addresses(addresses.clone())
        .recipient_addresses(addresses)
        .build();

    let expected = ParticipantIdentifier::of("X", Scheme::of("A"));
    assert_eq!(evidence.sender_identifier().unwrap(), expected);
    assert_eq!(evidence.recipient_identifier().unwrap(), expected);
}

#[test]
fn non_attributed_first_address_is_type_mismatch() {
    let evidence = EvidenceFixture::delivery()
        .sender_addresses(vec![plain("mailto:ap@example.org"), attributed_with("A", "X")])
        .recipient_addresses(vec![])
        .build();

    assert!(matches!(
        evidence.sender_identifier(),
        Err(EvidenceError::TypeMismatch { .. })
    ));
    assert!(evidence.recipient_identifier().unwrap_err().is_missing());
}

#[test]
fn issuer_policy_id() {
    let none = EvidenceFixture::delivery()
        .with(|t| t.evidence_issuer_policy_id = None)
        .build();
    assert_eq!(
        none.issuer_policy_id(),
        Err(EvidenceError::MissingField {
            field: "evidence_issuer_policy_id"
        })
    );

    let two = EvidenceFixture::delivery().policy_ids(&["P1", "P2"]).build();
    assert_eq!(two.issuer_policy_id().unwrap(), "P1");
}

#[test]
fn accessors_fail_independently() {
    let evidence = EvidenceFixture::delivery()
        .with(|t| {
            t.evidence_issuer_policy_id = None;
            t.event_time = Some("not a time".into());
        })
        .build();

    assert!(evidence.issuer_policy_id().is_err());
    assert!(matches!(
        evidence.event_time(),
        Err(EvidenceError::MalformedValue { .. })
    ));
    assert!(evidence.payload_digest().is_ok());
    assert!(evidence.extension_payload().is_ok());
}

#[test]
fn repeated_reads_are_identical() {
    let evidence = EvidenceFixture::relay_rejection().build();
    let kind = evidence.kind();
    let id = evidence.evidence_identifier().unwrap().to_string();
    let digest = evidence.payload_digest().unwrap().to_vec();
    let fingerprint = evidence.document().fingerprint();

    for _ in 0..10 {
        assert_eq!(evidence.kind(), kind);
        assert_eq!(evidence.evidence_identifier().unwrap(), id);
        assert_eq!(evidence.payload_digest().unwrap(), digest.as_slice());
        assert_eq!(evidence.document().fingerprint(), fingerprint);
    }
}

#[test]
fn signed_document_is_untouched() {
    let fixture = EvidenceFixture::delivery();
    let expected = fixture.document();
    let evidence = fixture.build();

    let _ = evidence.summary();
    let _ = evidence.extension_payload();
    assert_eq!(evidence.document(), &expected);
    assert_eq!(evidence.document().bytes(), expected.bytes());
}

#[test]
fn view_is_shareable_across_threads() {
    let evidence = std::sync::Arc::new(EvidenceFixture::delivery().build());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let evidence = std::sync::Arc::clone(&evidence);
            std::thread::spawn(move || evidence.sender_identifier().unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().value(), SENDER);
    }
}

#[test]
fn summary_serializes_for_audit() {
    let evidence = EvidenceFixture::relay_rejection()
        .with(|t| t.sender_details = None)
        .build();
    let summary = evidence.summary();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["kind"], "RelayRemMdAcceptanceRejection");
    assert_eq!(json["version"], "2");
    assert_eq!(json["event_reason"], "InvalidUserSignature");
    assert!(json["sender"].is_null());
    assert_eq!(json["problems"][0]["error"], "missing_field");
    assert_eq!(json["problems"][0]["field"], "sender_details");
    assert_eq!(
        summary.document_fingerprint,
        evidence.document().fingerprint().to_hex()
    );
}
