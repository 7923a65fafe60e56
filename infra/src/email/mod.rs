//! Email Delivery Module
//!
//! Email senders for delivering passcodes: SMTP through lettre for
//! production and a logging mock for development. Addresses are masked in
//! every log line.

pub mod adapter;
pub mod email_sender;
pub mod mock_email;

// SMTP email sender (feature-gated)
#[cfg(feature = "smtp-email")]
pub mod smtp;

pub use adapter::EmailSenderAdapter;
pub use email_sender::EmailSender;
pub use mock_email::MockEmailSender;

#[cfg(feature = "smtp-email")]
pub use smtp::SmtpEmailSender;

use otp_shared::EmailConfig;

#[cfg(test)]
mod tests;

/// Create an email sender based on configuration
///
/// Returns the implementation named by `config.provider`. A provider that
/// cannot be initialised falls back to the mock sender with a warning.
pub fn create_email_sender(config: &EmailConfig) -> Box<dyn EmailSender> {
    match config.provider.as_str() {
        "mock" => Box::new(MockEmailSender::new()),
        #[cfg(feature = "smtp-email")]
        "smtp" => {
            let sender = config
                .smtp
                .as_ref()
                .ok_or_else(|| crate::InfrastructureError::Config("SMTP settings are missing".to_string()))
                .and_then(SmtpEmailSender::new);

            match sender {
                Ok(sender) => Box::new(sender),
                Err(e) => {
                    tracing::error!("Failed to initialize SMTP email sender: {}", e);
                    tracing::warn!("Falling back to mock email sender");
                    Box::new(MockEmailSender::new())
                }
            }
        }
        _ => {
            tracing::warn!(
                "Unknown email provider '{}', using mock implementation",
                config.provider
            );
            Box::new(MockEmailSender::new())
        }
    }
}
