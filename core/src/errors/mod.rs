//! Domain-specific error types.
//!
//! Verification outcomes (expired, mismatch, locked out, not found) are not
//! errors; they are returned as [`crate::domain::VerificationOutcome`]. The
//! variants here cover rejected input and failed delivery only.

use thiserror::Error;

use crate::domain::DeliveryChannel;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Missing required field: {field}")]
    MissingInput { field: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to deliver code via {channel}: {message}")]
    DeliveryFailure {
        channel: DeliveryChannel,
        message: String,
    },
}

impl DomainError {
    pub fn missing(field: impl Into<String>) -> Self {
        DomainError::MissingInput {
            field: field.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DomainError::missing("identifier").to_string(),
            "Missing required field: identifier"
        );
        assert_eq!(
            DomainError::validation("bad phone").to_string(),
            "Validation error: bad phone"
        );
        let err = DomainError::DeliveryFailure {
            channel: DeliveryChannel::Sms,
            message: "provider down".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to deliver code via sms: provider down");
    }
}
