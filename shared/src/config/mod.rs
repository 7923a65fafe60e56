//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `otp` - Passcode lifetime, attempt cap and sweep interval
//! - `delivery` - Email and SMS provider settings

pub mod delivery;
pub mod environment;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use delivery::{DeliveryConfig, EmailConfig, SmsConfig, SmtpSettings, TwilioSettings};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::OtpConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Passcode lifecycle configuration
    pub otp: OtpConfig,

    /// Delivery provider configuration
    pub delivery: DeliveryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            otp: OtpConfig::default(),
            delivery: DeliveryConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        let config = Self {
            environment,
            server: ServerConfig::from_env(),
            otp: OtpConfig::from_env(),
            delivery: DeliveryConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check that the loaded values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.otp.validate()?;
        self.delivery.validate()?;
        Ok(())
    }
}

/// Configuration error raised when a loaded value cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Name of the offending setting
    pub key: String,
    /// What is wrong with it
    pub message: String,
}

impl ConfigError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration `{}`: {}", self.key, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
