//! Passcode record entity, one per active identifier.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

/// A live one-time passcode issued under an identifier
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct OtpRecord {
    /// Email address or phone number the code was issued for
    pub identifier: String,

    /// The numeric code to match
    #[serde(skip_serializing)]
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,

    /// Number of mismatched verification attempts so far
    pub attempts: u32,
}

impl OtpRecord {
    /// Creates a fresh record with no attempts
    ///
    /// # Arguments
    ///
    /// * `identifier` - The key the code is issued under
    /// * `code` - The generated code
    /// * `issued_at` - Issuance time
    /// * `ttl` - Lifetime of the code
    pub fn new(
        identifier: impl Into<String>,
        code: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            code: code.into(),
            issued_at,
            // Saturate rather than overflow on absurd lifetimes
            expires_at: issued_at
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            attempts: 0,
        }
    }

    /// `true` once `now` is strictly past the expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// `true` when the attempt cap has been reached
    pub fn is_exhausted(&self, max_attempts: u32) -> bool {
        self.attempts >= max_attempts
    }

    /// Gets the number of remaining verification attempts (0 if exhausted)
    pub fn remaining_attempts(&self, max_attempts: u32) -> u32 {
        max_attempts.saturating_sub(self.attempts)
    }

    /// Time left until expiration, or zero if already expired
    pub fn time_until_expiration(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

// The code is a secret; keep it out of debug output and therefore out of logs.
impl fmt::Debug for OtpRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpRecord")
            .field("identifier", &self.identifier)
            .field("code", &"******")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .field("attempts", &self.attempts)
            .finish()
    }
}
