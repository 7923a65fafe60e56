//! Types used by the passcode service

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::DeliveryChannel;

/// Result of sending a passcode
#[derive(Debug, Clone, Serialize)]
pub struct SendCodeResult {
    /// Channel the code was delivered over
    pub channel: DeliveryChannel,
    /// Message id reported by the delivery provider
    pub message_id: String,
    /// When the issued code stops being accepted
    pub expires_at: DateTime<Utc>,
    /// Lifetime left once delivery finished
    #[serde(skip)]
    pub expires_in: Duration,
}
