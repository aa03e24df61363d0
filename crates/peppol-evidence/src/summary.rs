//! Best-effort summary of an evidence for audit logging.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::codes::{EventCode, EventReason};
use crate::document::EvidenceKind;
use crate::error::{EvidenceError, Result};
use crate::evidence::SignedRemEvidence;

/// Every field the view can answer, collected without stopping at the
/// first failure. Fields that failed are `None` and their errors are kept
/// in `problems`, in accessor order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceSummary {
    pub kind: EvidenceKind,
    /// Schema version attribute, when present. Absence is not a problem.
    pub version: Option<String>,
    /// Blake3 of the signed bytes, hex.
    pub document_fingerprint: String,
    pub evidence_identifier: Option<String>,
    pub event_code: Option<EventCode>,
    pub event_reason: Option<EventReason>,
    pub event_time: Option<DateTime<Utc>>,
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub document_type: Option<String>,
    pub instance_identifier: Option<String>,
    /// Hex of the payload digest.
    pub payload_digest: Option<String>,
    pub problems: Vec<EvidenceError>,
}

impl SignedRemEvidence {
    /// Collect a summary of this evidence.
    ///
    /// The event reason is only looked up for negative outcomes; a positive
    /// evidence has no reasons block, and that is not a problem.
    pub fn summary(&self) -> EvidenceSummary {
        let mut problems = Vec::new();
        let p = &mut problems;

        let evidence_identifier = keep(p, self.evidence_identifier().map(str::to_string));
        let event_code = keep(p, self.event_code());
        let event_reason = match event_code {
            Some(code) if !code.is_positive() => keep(p, self.event_reason()),
            _ => None,
        };
        let event_time = keep(p, self.event_time());
        let sender = keep(p, self.sender_identifier().map(|id| id.to_string()));
        let recipient = keep(p, self.recipient_identifier().map(|id| id.to_string()));
        let document_type = keep(p, self.document_type_identifier().map(|d| d.to_string()));
        let instance_identifier = keep(p, self.instance_identifier().map(|i| i.to_string()));
        let payload_digest = keep(p, self.payload_digest().map(hex::encode));

        EvidenceSummary {
            kind: self.kind(),
            version: self.typed().version.clone(),
            document_fingerprint: self.document().fingerprint().to_hex(),
            evidence_identifier,
            event_code,
            event_reason,
            event_time,
            sender,
            recipient,
            document_type,
            instance_identifier,
            payload_digest,
            problems,
        }
    }
}

fn keep<T>(problems: &mut Vec<EvidenceError>, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            problems.push(e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::document::{ElementName, SignedDocument};
    use crate::model::{MessageDetails, RemEvidence};
    use crate::{EventCode, EvidenceError, EvidenceKind, SignedRemEvidence};

    #[test]
    fn test_summary_collects_partial_fields() {
        let typed = RemEvidence {
            version: Some("2".into()),
            evidence_identifier: Some("ev-1".into()),
            event_code: Some(EventCode::Rejection.code()),
            sender_message_details: Some(MessageDetails {
                digest_value: Some(vec![0xde, 0xad].into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let evidence = SignedRemEvidence::new(
            typed,
            SignedDocument::new(
                b"<RelayREMMDAcceptanceRejection/>".to_vec(),
                Some(ElementName::rem("RelayREMMDAcceptanceRejection")),
            ),
        );

        let summary = evidence.summary();
        assert_eq!(summary.kind, EvidenceKind::RelayRemMdAcceptanceRejection);
        assert_eq!(summary.version.as_deref(), Some("2"));
        assert_eq!(summary.evidence_identifier.as_deref(), Some("ev-1"));
        assert_eq!(summary.event_code, Some(EventCode::Rejection));
        assert_eq!(summary.payload_digest.as_deref(), Some("dead"));
        assert_eq!(summary.sender, None);
        assert!(summary
            .problems
            .contains(&EvidenceError::MissingField { field: "event_reasons" }));
        assert!(summary
            .problems
            .contains(&EvidenceError::MissingField { field: "sender_details" }));
    }

    #[test]
    fn test_summary_skips_reason_for_positive_outcome() {
        let typed = RemEvidence {
            event_code: Some(EventCode::Delivery.code()),
            ..Default::default()
        };
        let evidence = SignedRemEvidence::new(typed, SignedDocument::new(Vec::new(), None));
        let summary = evidence.summary();
        assert_eq!(summary.kind, EvidenceKind::Unknown);
        assert_eq!(summary.version, None);
        assert!(!summary
            .problems
            .iter()
            .any(|p| matches!(p, EvidenceError::MissingField { field: "event_reasons" })));
    }
}
