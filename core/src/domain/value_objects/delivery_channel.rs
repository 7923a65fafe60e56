//! Delivery channel a passcode travels over.

use otp_shared::identifier::{is_valid_email, is_valid_phone, normalize_phone_number};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Channel used to deliver a passcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryChannel {
    Email,
    Sms,
}

impl DeliveryChannel {
    /// Infer the channel from the identifier's shape
    ///
    /// Returns `None` when the identifier is neither a valid email address
    /// nor an E.164 phone number.
    pub fn detect(identifier: &str) -> Option<Self> {
        if is_valid_email(identifier) {
            Some(DeliveryChannel::Email)
        } else if is_valid_phone(identifier) {
            Some(DeliveryChannel::Sms)
        } else {
            None
        }
    }

    /// Whether this channel can deliver to the identifier
    pub fn accepts(&self, identifier: &str) -> bool {
        match self {
            DeliveryChannel::Email => is_valid_email(identifier),
            DeliveryChannel::Sms => is_valid_phone(identifier),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryChannel::Email => "email",
            DeliveryChannel::Sms => "sms",
        }
    }
}

impl fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(DeliveryChannel::Email),
            "sms" | "phone" => Ok(DeliveryChannel::Sms),
            _ => Err(format!("Invalid delivery channel: {}", s)),
        }
    }
}

/// Canonical store key for an identifier
///
/// Surrounding whitespace is dropped and phone numbers lose their formatting
/// characters, so `+1 415 555 2671` and `+14155552671` share one record.
pub fn canonical_identifier(identifier: &str) -> String {
    let trimmed = identifier.trim();
    if !trimmed.contains('@') && is_valid_phone(trimmed) {
        normalize_phone_number(trimmed)
    } else {
        trimmed.to_string()
    }
}
