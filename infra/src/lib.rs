//! # Infrastructure Layer
//!
//! This crate implements the delivery side of the passcode service. It
//! provides concrete senders for the core `OtpSenderTrait`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Email**: SMTP delivery via lettre, plus a mock for development
//! - **SMS**: Twilio delivery via its REST API, plus a mock for development
//! - **Adapters**: bridges from the provider traits to the core sender trait
//!
//! ## Features
//!
//! - `smtp-email`: Enable the SMTP email sender (default)
//! - `twilio-sms`: Enable the Twilio SMS sender (default)

/// Email delivery module
pub mod email;

/// SMS delivery module
pub mod sms;

/// Message texts shared by both channels
pub mod template;

pub use email::{create_email_sender, EmailSender, EmailSenderAdapter, MockEmailSender};
pub use sms::{create_sms_sender, MockSmsSender, SmsSender, SmsSenderAdapter};
pub use template::MessageTemplate;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// Email service error
    #[error("Email service error: {0}")]
    Email(String),
}
