//! In-memory passcode store
//!
//! A single `HashMap` guarded by a `std::sync::Mutex`. Every operation holds
//! the lock only for its own synchronous critical section and never across an
//! `.await`, so the store can be shared freely between request handlers and
//! the expiry sweeper.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::OtpRecord;

/// What to do with a record after a [`OtpStore::resolve`] policy has run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    Keep,
    Remove,
}

/// Keyed store of live passcode records, at most one per identifier
#[derive(Debug)]
pub struct OtpStore {
    records: Mutex<HashMap<String, OtpRecord>>,
    ttl: Duration,
}

impl OtpStore {
    /// Create an empty store whose records live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Lifetime given to newly issued records
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // Critical sections leave the map consistent, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, OtpRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issue `code` under `identifier`, replacing any existing record
    pub fn issue(&self, identifier: &str, code: &str) -> OtpRecord {
        self.issue_at(identifier, code, Utc::now())
    }

    /// Issue with an explicit clock reading
    pub fn issue_at(&self, identifier: &str, code: &str, now: DateTime<Utc>) -> OtpRecord {
        let record = OtpRecord::new(identifier, code, now, self.ttl);
        self.lock().insert(identifier.to_string(), record.clone());
        record
    }

    /// Snapshot of the record for `identifier`, if any
    pub fn lookup(&self, identifier: &str) -> Option<OtpRecord> {
        self.lock().get(identifier).cloned()
    }

    /// Remove the record for `identifier`; returns whether one existed
    pub fn remove(&self, identifier: &str) -> bool {
        self.lock().remove(identifier).is_some()
    }

    /// Remove the record only if it is still the one issued with `code` at `issued_at`
    ///
    /// A newer send for the same identifier is left untouched, even when it
    /// happened to draw the same code.
    pub fn revoke(&self, identifier: &str, code: &str, issued_at: DateTime<Utc>) -> bool {
        let mut records = self.lock();
        match records.get(identifier) {
            Some(record) if record.code == code && record.issued_at == issued_at => {
                records.remove(identifier);
                true
            }
            _ => false,
        }
    }

    /// Remove every record whose expiry is before `now`; returns the count
    pub fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|_, record| record.expires_at >= now);
        before - records.len()
    }

    /// Run `policy` against the record for `identifier` under the store lock
    ///
    /// The closure sees `None` when no record exists. When it sees a record it
    /// may mutate it and decides whether it stays. Lookup, decision and
    /// removal happen in one critical section.
    pub fn resolve<T, F>(&self, identifier: &str, policy: F) -> T
    where
        F: FnOnce(Option<&mut OtpRecord>) -> (RecordAction, T),
    {
        let mut records = self.lock();
        let (action, value) = policy(records.get_mut(identifier));
        if action == RecordAction::Remove {
            records.remove(identifier);
        }
        value
    }

    /// Number of live (not yet evicted) records
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for OtpStore {
    fn default() -> Self {
        Self::new(Duration::minutes(10))
    }
}
