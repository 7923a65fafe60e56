//! Verification policy applied to stored records

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use std::sync::Arc;

use crate::domain::VerificationOutcome;

use super::store::{OtpStore, RecordAction};

/// Applies the accept / reject / expire / lockout policy against an [`OtpStore`]
#[derive(Debug, Clone)]
pub struct Verifier {
    store: Arc<OtpStore>,
    max_attempts: u32,
}

impl Verifier {
    pub fn new(store: Arc<OtpStore>, max_attempts: u32) -> Self {
        Self {
            store,
            max_attempts,
        }
    }

    /// Attempt cap applied to each record
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Check `code` against the record for `identifier`
    pub fn verify(&self, identifier: &str, code: &str) -> VerificationOutcome {
        self.verify_at(identifier, code, Utc::now())
    }

    /// Check with an explicit clock reading
    ///
    /// Checks run in order: absent, expired, attempts exhausted, mismatch,
    /// match. The whole sequence runs under the store lock, so two concurrent
    /// calls for one identifier never both see the same attempt count.
    pub fn verify_at(&self, identifier: &str, code: &str, now: DateTime<Utc>) -> VerificationOutcome {
        let max_attempts = self.max_attempts;

        self.store.resolve(identifier, |record| {
            let Some(record) = record else {
                return (RecordAction::Keep, VerificationOutcome::NotFound);
            };

            if record.is_expired_at(now) {
                return (RecordAction::Remove, VerificationOutcome::Expired);
            }

            if record.is_exhausted(max_attempts) {
                return (RecordAction::Remove, VerificationOutcome::LockedOut);
            }

            if !codes_match(&record.code, code) {
                record.attempts += 1;
                return (
                    RecordAction::Keep,
                    VerificationOutcome::Mismatch {
                        remaining_attempts: record.remaining_attempts(max_attempts),
                    },
                );
            }

            (RecordAction::Remove, VerificationOutcome::Success)
        })
    }
}

fn codes_match(stored: &str, submitted: &str) -> bool {
    constant_time_eq(stored.as_bytes(), submitted.as_bytes())
}
