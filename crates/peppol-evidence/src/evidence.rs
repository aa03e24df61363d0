//! SignedRemEvidence: the read-only view over a signed evidence record.
//!
//! Every accessor is a total function over optional nested structure. Each
//! returns its own `Result`, so a caller that only needs the payload digest is
//! not blocked by a missing policy ID. No accessor substitutes a default.
//!
//! Positional rules ("first reason", "first address", "first extension") are
//! schema-mandated. They are never replaced by searching for matching content.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use peppol_common::{DocumentTypeIdentifier, InstanceIdentifier, ParticipantIdentifier, Scheme};

use crate::codes::{EventCode, EventReason};
use crate::document::{EvidenceKind, SignedDocument};
use crate::error::{EvidenceError, Result};
use crate::model::{
    AddressEntry, AnyContainer, AnyItem, EntityDetails, Extension, ExtensionContent,
    MessageDetails, PeppolRemExtension, RemEvidence,
};

/// A signed REM evidence, held as a typed tree and as the raw signed document.
///
/// Immutable after construction. Safe to share between threads for reading.
#[derive(Debug, Clone)]
pub struct SignedRemEvidence {
    typed: RemEvidence,
    document: SignedDocument,
}

impl SignedRemEvidence {
    /// Wrap a typed tree and the signed document it was parsed from.
    ///
    /// Both must come from the same parse. This is not checked: the
    /// constructor is the trusted seam, and the two are never reconciled.
    pub fn new(typed: RemEvidence, document: SignedDocument) -> Self {
        Self { typed, document }
    }

    /// The typed field tree.
    pub fn typed(&self) -> &RemEvidence {
        &self.typed
    }

    /// The raw signed document, for signature validation or archiving.
    pub fn document(&self) -> &SignedDocument {
        &self.document
    }

    /// Classify the evidence by its document element. Never fails.
    pub fn kind(&self) -> EvidenceKind {
        EvidenceKind::classify(&self.document)
    }

    pub fn evidence_identifier(&self) -> Result<&str> {
        self.typed
            .evidence_identifier
            .as_deref()
            .ok_or(EvidenceError::missing("evidence_identifier"))
    }

    /// The event outcome.
    pub fn event_code(&self) -> Result<EventCode> {
        let code = self
            .typed
            .event_code
            .as_deref()
            .ok_or(EvidenceError::missing("event_code"))?;
        EventCode::from_code(code).ok_or_else(|| EvidenceError::UnknownCode {
            field: "event_code",
            code: code.to_string(),
        })
    }

    /// The reason from the first entry of the reasons list. Later entries are ignored.
    pub fn event_reason(&self) -> Result<EventReason> {
        let first = self
            .typed
            .event_reasons
            .as_deref()
            .and_then(|list| list.first())
            .ok_or(EvidenceError::missing("event_reasons"))?;
        let code = first
            .code
            .as_deref()
            .ok_or(EvidenceError::missing("event_reasons[0].code"))?;
        EventReason::from_code(code).ok_or_else(|| EvidenceError::UnknownCode {
            field: "event_reasons[0].code",
            code: code.to_string(),
        })
    }

    /// The event time, normalized to UTC.
    ///
    /// A timestamp without offset is read as UTC.
    pub fn event_time(&self) -> Result<DateTime<Utc>> {
        let raw = self
            .typed
            .event_time
            .as_deref()
            .ok_or(EvidenceError::missing("event_time"))?;
        parse_xsd_date_time(raw).map_err(|reason| EvidenceError::MalformedValue {
            field: "event_time",
            reason,
        })
    }

    /// The first policy ID of the evidence issuer.
    pub fn issuer_policy_id(&self) -> Result<&str> {
        self.typed
            .evidence_issuer_policy_id
            .as_deref()
            .and_then(|list| list.first())
            .map(String::as_str)
            .ok_or(EvidenceError::missing("evidence_issuer_policy_id"))
    }

    /// The first entity name of the first name/address block of the issuer.
    pub fn issuer_details(&self) -> Result<&str> {
        self.typed
            .evidence_issuer_details
            .as_ref()
            .and_then(|details| details.names_postal_addresses.as_deref())
            .and_then(|list| list.first())
            .and_then(|entry| entry.entity_name.as_ref())
            .and_then(|name| name.name.first())
            .map(String::as_str)
            .ok_or(EvidenceError::missing("evidence_issuer_details"))
    }

    pub fn sender_identifier(&self) -> Result<ParticipantIdentifier> {
        let details = self
            .typed
            .sender_details
            .as_ref()
            .ok_or(EvidenceError::missing("sender_details"))?;
        first_participant(details, "sender_details")
    }

    /// The first address of the first recipient.
    pub fn recipient_identifier(&self) -> Result<ParticipantIdentifier> {
        let details = self
            .typed
            .recipients_details
            .as_deref()
            .and_then(|list| list.first())
            .ok_or(EvidenceError::missing("recipients_details"))?;
        first_participant(details, "recipients_details[0]")
    }

    /// Document type, carried in the message subject.
    pub fn document_type_identifier(&self) -> Result<DocumentTypeIdentifier> {
        let subject = self
            .message_details()?
            .message_subject
            .as_deref()
            .ok_or(EvidenceError::missing("sender_message_details.message_subject"))?;
        Ok(DocumentTypeIdentifier::of(subject))
    }

    /// The identifier assigned by the sender's user agent.
    pub fn document_type_instance_identifier(&self) -> Result<&str> {
        self.message_details()?
            .ua_message_identifier
            .as_deref()
            .ok_or(EvidenceError::missing(
                "sender_message_details.ua_message_identifier",
            ))
    }

    /// The identifier assigned by the relaying access point.
    pub fn instance_identifier(&self) -> Result<InstanceIdentifier> {
        let id = self
            .message_details()?
            .message_identifier_by_remmd
            .as_deref()
            .ok_or(EvidenceError::missing(
                "sender_message_details.message_identifier_by_remmd",
            ))?;
        Ok(InstanceIdentifier::of(id))
    }

    /// Digest of the transmitted payload. Opaque; not decoded.
    pub fn payload_digest(&self) -> Result<&[u8]> {
        self.message_details()?
            .digest_value
            .as_deref()
            .ok_or(EvidenceError::missing("sender_message_details.digest_value"))
    }

    /// Algorithm URI of [`payload_digest`](Self::payload_digest).
    pub fn payload_digest_method(&self) -> Result<&str> {
        self.message_details()?
            .digest_method
            .as_deref()
            .ok_or(EvidenceError::missing("sender_message_details.digest_method"))
    }

    /// The PEPPOL transmission evidence carried in the extensions block.
    ///
    /// Path: first extension, its first content item (the `any` wrapper),
    /// the wrapper's first item.
    pub fn extension_payload(&self) -> Result<&PeppolRemExtension> {
        let result = self
            .extensions_list()
            .and_then(first_extension)
            .and_then(first_content_item)
            .and_then(unwrap_typed)
            .and_then(first_inner_item);

        if let Err(e) = &result {
            tracing::debug!(
                document = %self.document.fingerprint(),
                error = %e,
                "no transmission evidence in extensions"
            );
        }
        result
    }

    fn message_details(&self) -> Result<&MessageDetails> {
        self.typed
            .sender_message_details
            .as_ref()
            .ok_or(EvidenceError::missing("sender_message_details"))
    }

    fn extensions_list(&self) -> Result<&[Extension]> {
        self.typed
            .extensions
            .as_deref()
            .ok_or(EvidenceError::missing("extensions"))
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Extension walk
// ─────────────────────────────────────────────────────────────────────────

fn first_extension(extensions: &[Extension]) -> Result<&Extension> {
    extensions
        .first()
        .ok_or(EvidenceError::missing("extensions[0]"))
}

fn first_content_item(extension: &Extension) -> Result<&ExtensionContent> {
    extension
        .content
        .first()
        .ok_or(EvidenceError::missing("extensions[0].content[0]"))
}

fn unwrap_typed(content: &ExtensionContent) -> Result<&AnyContainer> {
    match content {
        ExtensionContent::Any(any) => Ok(any),
        other => Err(EvidenceError::TypeMismatch {
            field: "extensions[0].content[0]",
            expected: "any wrapper",
            found: other.variant_name().to_string(),
        }),
    }
}

fn first_inner_item(any: &AnyContainer) -> Result<&PeppolRemExtension> {
    let item = any
        .content
        .first()
        .ok_or(EvidenceError::missing("extensions[0].content[0].content[0]"))?;
    match item {
        AnyItem::TransmissionEvidence(ext) => Ok(ext),
        other => Err(EvidenceError::TypeMismatch {
            field: "extensions[0].content[0].content[0]",
            expected: "transmission evidence",
            found: other.variant_name(),
        }),
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────

/// Build a participant from the first electronic address of an entity block.
fn first_participant(
    details: &EntityDetails,
    field: &'static str,
) -> Result<ParticipantIdentifier> {
    let entry = details
        .electronic_addresses
        .first()
        .ok_or(EvidenceError::missing(field))?;
    match entry {
        AddressEntry::Attributed { scheme, value } => {
            Ok(ParticipantIdentifier::of(value.as_str(), Scheme::of(scheme.as_str())))
        }
        other => Err(EvidenceError::TypeMismatch {
            field,
            expected: "attributed address",
            found: other.variant_name().to_string(),
        }),
    }
}

/// Parse an xsd:dateTime. Offsets are honored; a missing offset means UTC.
fn parse_xsd_date_time(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Some(midnight) = end_of_day_as_next_midnight(raw) {
        return parse_xsd_date_time(&midnight);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|e| format!("{}: {:?}", e, raw))
}

/// xsd:dateTime allows `24:00:00` as the end of a day. Rewrite it as
/// `00:00:00` on the following day, keeping any offset.
fn end_of_day_as_next_midnight(raw: &str) -> Option<String> {
    let (date, rest) = raw.split_once("T24:00:00")?;
    let offset = match rest.strip_prefix('.') {
        Some(fraction) => {
            let zeros = fraction.len() - fraction.trim_start_matches('0').len();
            if zeros == 0 {
                return None;
            }
            &fraction[zeros..]
        }
        None => rest,
    };
    if offset.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let next = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?.succ_opt()?;
    Some(format!("{}T00:00:00{}", next.format("%Y-%m-%d"), offset))
}
