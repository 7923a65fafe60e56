//! Mock email sender for development

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{debug, info};

use otp_shared::identifier::{is_valid_email, mask_email};

use super::email_sender::EmailSender;
use crate::InfrastructureError;

/// Email sender that only logs
#[derive(Debug, Default)]
pub struct MockEmailSender {
    simulate_failure: AtomicBool,
    message_count: AtomicUsize,
}

impl MockEmailSender {
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

    pub fn get_message_count(&self) -> usize {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError> {
        if !is_valid_email(to) {
            return Err(InfrastructureError::Email(format!(
                "Invalid email address: {}",
                mask_email(to)
            )));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err(InfrastructureError::Email(
                "Simulated email delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", uuid::Uuid::new_v4());
        self.message_count.fetch_add(1, Ordering::SeqCst);

        info!(
            to = %mask_email(to),
            subject = %subject,
            message_id = %message_id,
            "[MOCK EMAIL] message accepted"
        );
        debug!(body = %body, "[MOCK EMAIL] message body");

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
