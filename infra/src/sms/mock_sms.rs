//! Mock SMS sender for development
//!
//! Logs messages instead of sending them. Recipients are masked; the body is
//! only logged at debug level so codes stay out of production logs.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{debug, info};

use otp_shared::identifier::{is_valid_phone, mask_phone_number};

use super::sms_sender::SmsSender;
use crate::InfrastructureError;

/// SMS sender that only logs
#[derive(Debug, Default)]
pub struct MockSmsSender {
    simulate_failure: AtomicBool,
    message_count: AtomicUsize,
}

impl MockSmsSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sender that fails every send
    pub fn failing() -> Self {
        let sender = Self::new();
        sender.set_simulate_failure(true);
        sender
    }

    pub fn set_simulate_failure(&self, fail: bool) {
        self.simulate_failure.store(fail, Ordering::SeqCst);
    }

    /// Number of messages accepted so far
    pub fn get_message_count(&self) -> usize {
        self.message_count.load(Ordering::SeqCst)
    }

    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

#[async_trait]
impl SmsSender for MockSmsSender {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        if !is_valid_phone(phone_number) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number: {}",
                mask_phone_number(phone_number)
            )));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err(InfrastructureError::Sms(
                "Simulated SMS delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", uuid::Uuid::new_v4());
        self.message_count.fetch_add(1, Ordering::SeqCst);

        info!(
            to = %mask_phone_number(phone_number),
            message_id = %message_id,
            "[MOCK SMS] message accepted"
        );
        debug!(body = %message, "[MOCK SMS] message body");

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
