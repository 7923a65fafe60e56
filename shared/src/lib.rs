//! Shared utilities and common types for the OTP service
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures
//! - Identifier utilities (email / phone validation, log masking)
//! - Common response wrappers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, DeliveryConfig, EmailConfig, Environment, LogFormat, LoggingConfig,
    OtpConfig, ServerConfig, SmsConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::ApiResponse;
pub use utils::identifier;
