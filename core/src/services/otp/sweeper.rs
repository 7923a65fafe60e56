//! Background eviction of expired passcode records

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use otp_shared::config::otp::MAX_SWEEP_INTERVAL_SECONDS;

use super::store::OtpStore;

const MIN_INTERVAL: Duration = Duration::from_millis(1);
const MAX_INTERVAL: Duration = Duration::from_secs(MAX_SWEEP_INTERVAL_SECONDS);

/// Result of one sweep pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    /// Number of expired records removed
    pub removed: usize,
    /// Records still live after the pass
    pub remaining: usize,
}

/// Periodically removes expired records from the store
///
/// Verification already deletes an expired record when it sees one; the
/// sweeper reclaims records nobody asks about again.
pub struct ExpirySweeper {
    store: Arc<OtpStore>,
    interval: Duration,
}

impl ExpirySweeper {
    /// Create a sweeper over `store` running every `interval`
    ///
    /// The interval is clamped to between one millisecond and one day.
    pub fn new(store: Arc<OtpStore>, interval: Duration) -> Self {
        Self {
            store,
            interval: interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run a single sweep pass at `now`
    pub fn run_once(&self, now: DateTime<Utc>) -> SweepResult {
        let removed = self.store.sweep_expired(now);
        let remaining = self.store.len();

        if removed > 0 {
            info!(
                removed = removed,
                remaining = remaining,
                event = "otp_swept",
                "Evicted expired OTP records"
            );
        } else {
            debug!(remaining = remaining, event = "otp_swept", "No expired OTP records");
        }

        SweepResult { removed, remaining }
    }

    /// Start the sweeper as a background task
    ///
    /// The first pass runs one interval after the call. The loop exits as soon
    /// as `cancel` is cancelled; await the returned handle to join it.
    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(
                "OTP expiry sweeper started - will run every {} seconds",
                self.interval.as_secs()
            );

            let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        self.run_once(Utc::now());
                    }
                }
            }

            info!("OTP expiry sweeper stopped");
        })
    }
}
