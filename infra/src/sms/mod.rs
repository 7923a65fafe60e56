//! SMS Delivery Module
//!
//! This module provides SMS senders for delivering passcodes. It includes a
//! Twilio implementation for production and a mock implementation for
//! development.
//!
//! ## Features
//!
//! - **SMS Sender Trait**: Common interface for all SMS providers
//! - **Mock Implementation**: Log output for development
//! - **Twilio Support**: Production SMS via the Twilio REST API
//! - **Security**: Phone number masking in logs

pub mod adapter;
pub mod mock_sms;
pub mod sms_sender;

// Twilio SMS sender (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

// Re-export commonly used types
pub use adapter::SmsSenderAdapter;
pub use mock_sms::MockSmsSender;
pub use sms_sender::SmsSender;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsSender};

use otp_shared::SmsConfig;

#[cfg(test)]
mod tests;

/// Create an SMS sender based on configuration
///
/// Returns the implementation named by `config.provider`. A provider that
/// cannot be initialised falls back to the mock sender with a warning.
pub fn create_sms_sender(config: &SmsConfig) -> Box<dyn SmsSender> {
    match config.provider.as_str() {
        "mock" => Box::new(MockSmsSender::new()),
        #[cfg(feature = "twilio-sms")]
        "twilio" => {
            let sender = config
                .twilio
                .as_ref()
                .ok_or_else(|| {
                    crate::InfrastructureError::Config("Twilio settings are missing".to_string())
                })
                .and_then(TwilioConfig::try_from)
                .and_then(TwilioSmsSender::new);

            match sender {
                Ok(sender) => Box::new(sender),
                Err(e) => {
                    tracing::error!("Failed to initialize Twilio SMS sender: {}", e);
                    tracing::warn!("Falling back to mock SMS sender");
                    Box::new(MockSmsSender::new())
                }
            }
        }
        _ => {
            tracing::warn!(
                "Unknown SMS provider '{}', using mock implementation",
                config.provider
            );
            Box::new(MockSmsSender::new())
        }
    }
}
