//! Closed code sets from the REM evidence schema.
//!
//! Codes are URIs. A code outside the set is never mapped to a default:
//! `from_code` returns `None` and the caller decides how to surface it.

use serde::{Deserialize, Serialize};
use std::fmt;

const EVENT_NS: &str = "http://uri.etsi.org/02640/Event#";
const EVENT_REASON_NS: &str = "http://uri.etsi.org/REM/EventReason#";

/// The outcome recorded by an evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCode {
    /// The relaying access point accepted the message.
    Acceptance,
    /// The relaying access point rejected the message.
    Rejection,
    /// The message was delivered to the recipient.
    Delivery,
    /// Delivery did not happen before the retention period expired.
    DeliveryExpiration,
}

impl EventCode {
    pub const ALL: [EventCode; 4] = [
        Self::Acceptance,
        Self::Rejection,
        Self::Delivery,
        Self::DeliveryExpiration,
    ];

    fn fragment(self) -> &'static str {
        match self {
            Self::Acceptance => "Acceptance",
            Self::Rejection => "Rejection",
            Self::Delivery => "Delivery",
            Self::DeliveryExpiration => "DeliveryExpiration",
        }
    }

    /// The full URI code as it appears in the evidence.
    pub fn code(self) -> String {
        format!("{}{}", EVENT_NS, self.fragment())
    }

    /// Look up a URI code. Matching is exact.
    pub fn from_code(code: &str) -> Option<Self> {
        let fragment = code.strip_prefix(EVENT_NS)?;
        Self::ALL.into_iter().find(|c| c.fragment() == fragment)
    }

    /// Whether this outcome is a positive one.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Acceptance | Self::Delivery)
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", EVENT_NS, self.fragment())
    }
}

/// Why an event happened. Only meaningful next to a negative [`EventCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventReason {
    InvalidUserSignature,
    InvalidUserCertificate,
    MessageFormatNotSupported,
    MalwareFound,
    MessageSizeExceeded,
    UnknownRecipient,
    RecipientNotReachable,
    DeliveryTimeout,
    Other,
}

impl EventReason {
    pub const ALL: [EventReason; 9] = [
        Self::InvalidUserSignature,
        Self::InvalidUserCertificate,
        Self::MessageFormatNotSupported,
        Self::MalwareFound,
        Self::MessageSizeExceeded,
        Self::UnknownRecipient,
        Self::RecipientNotReachable,
        Self::DeliveryTimeout,
        Self::Other,
    ];

    fn fragment(self) -> &'static str {
        match self {
            Self::InvalidUserSignature => "Invalid_User_Signature",
            Self::InvalidUserCertificate => "Invalid_User_Certificate",
            Self::MessageFormatNotSupported => "Message_Format_Not_Supported",
            Self::MalwareFound => "Malware_Found",
            Self::MessageSizeExceeded => "Message_Size_Exceeded",
            Self::UnknownRecipient => "Unknown_Recipient",
            Self::RecipientNotReachable => "Recipient_Not_Reachable",
            Self::DeliveryTimeout => "Delivery_Timeout",
            Self::Other => "Other",
        }
    }

    /// The full URI code as it appears in the evidence.
    pub fn code(self) -> String {
        format!("{}{}", EVENT_REASON_NS, self.fragment())
    }

    /// Look up a URI code. Matching is exact.
    pub fn from_code(code: &str) -> Option<Self> {
        let fragment = code.strip_prefix(EVENT_REASON_NS)?;
        Self::ALL.into_iter().find(|r| r.fragment() == fragment)
    }
}

impl fmt::Display for EventReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", EVENT_REASON_NS, self.fragment())
    }
}
