//! Result of checking a submitted code against the store.

use serde::Serialize;

/// Outcome of one verification call
///
/// These are expected results, not errors: every variant is a normal answer
/// the request layer renders for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// Code matched; the record has been consumed
    Success,
    /// Code did not match; the record stays and the attempt was counted
    Mismatch { remaining_attempts: u32 },
    /// Record was past its expiry; it has been removed
    Expired,
    /// Attempt cap was already reached; the record has been removed
    LockedOut,
    /// No record exists for the identifier
    NotFound,
}

impl VerificationOutcome {
    /// Human-readable message for the outcome
    pub fn message(&self) -> &'static str {
        match self {
            VerificationOutcome::Success => "OTP verified successfully",
            VerificationOutcome::Mismatch { .. } => "Invalid OTP",
            VerificationOutcome::Expired => "OTP has expired",
            VerificationOutcome::LockedOut => "Too many failed attempts. Please request a new OTP",
            VerificationOutcome::NotFound => "OTP not found or expired",
        }
    }

    /// Short machine-readable name, used as a log field
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationOutcome::Success => "success",
            VerificationOutcome::Mismatch { .. } => "mismatch",
            VerificationOutcome::Expired => "expired",
            VerificationOutcome::LockedOut => "locked_out",
            VerificationOutcome::NotFound => "not_found",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, VerificationOutcome::Success)
    }

    /// Whether the caller may retry against the same record
    pub fn is_terminal(&self) -> bool {
        !matches!(self, VerificationOutcome::Mismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_mismatch_is_retryable() {
        assert!(VerificationOutcome::Success.is_terminal());
        assert!(VerificationOutcome::Expired.is_terminal());
        assert!(VerificationOutcome::LockedOut.is_terminal());
        assert!(VerificationOutcome::NotFound.is_terminal());
        assert!(!VerificationOutcome::Mismatch { remaining_attempts: 1 }.is_terminal());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            VerificationOutcome::NotFound.message(),
            "OTP not found or expired"
        );
        assert_eq!(
            VerificationOutcome::Mismatch { remaining_attempts: 0 }.message(),
            "Invalid OTP"
        );
    }

    #[test]
    fn test_serialization_shape() {
        let json =
            serde_json::to_value(VerificationOutcome::Mismatch { remaining_attempts: 2 }).unwrap();
        assert_eq!(json["status"], "mismatch");
        assert_eq!(json["remaining_attempts"], 2);

        let json = serde_json::to_value(VerificationOutcome::LockedOut).unwrap();
        assert_eq!(json["status"], "locked_out");
    }
}
