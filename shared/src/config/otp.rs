//! Passcode lifecycle configuration

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

/// Default lifetime of an issued passcode (10 minutes)
pub const DEFAULT_TTL_SECONDS: u64 = 600;

/// Default number of mismatched attempts tolerated before lockout
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default interval between expiry sweeps (5 minutes)
pub const DEFAULT_SWEEP_INTERVAL_SECONDS: u64 = 300;

/// Longest accepted passcode lifetime (one day)
pub const MAX_TTL_SECONDS: u64 = 86_400;

/// Longest accepted interval between sweeps (one day)
pub const MAX_SWEEP_INTERVAL_SECONDS: u64 = 86_400;

/// Passcode lifecycle configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds a passcode stays valid after issuance
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,

    /// Mismatched attempts allowed before the record is locked out
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Seconds between background expiry sweeps
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,

    /// Name shown in email subjects and SMS bodies
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECONDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            sweep_interval_seconds: DEFAULT_SWEEP_INTERVAL_SECONDS,
            app_name: default_app_name(),
        }
    }
}

impl OtpConfig {
    /// Load from `OTP_*` environment variables
    pub fn from_env() -> Self {
        Self {
            ttl_seconds: env_or("OTP_TTL_SECONDS", DEFAULT_TTL_SECONDS),
            max_attempts: env_or("OTP_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS),
            sweep_interval_seconds: env_or(
                "OTP_SWEEP_INTERVAL_SECONDS",
                DEFAULT_SWEEP_INTERVAL_SECONDS,
            ),
            app_name: std::env::var("OTP_APP_NAME").unwrap_or_else(|_| default_app_name()),
        }
    }

    /// Reject zero values and lifetimes or intervals longer than a day
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TTL_SECONDS).contains(&self.ttl_seconds) {
            return Err(ConfigError::new(
                "OTP_TTL_SECONDS",
                format!("must be between 1 and {}", MAX_TTL_SECONDS),
            ));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::new("OTP_MAX_ATTEMPTS", "must be greater than zero"));
        }
        if !(1..=MAX_SWEEP_INTERVAL_SECONDS).contains(&self.sweep_interval_seconds) {
            return Err(ConfigError::new(
                "OTP_SWEEP_INTERVAL_SECONDS",
                format!("must be between 1 and {}", MAX_SWEEP_INTERVAL_SECONDS),
            ));
        }
        Ok(())
    }

    /// Lifetime in whole minutes, rounded up, for message bodies
    pub fn ttl_minutes(&self) -> u64 {
        self.ttl_seconds.div_ceil(60)
    }
}

fn default_ttl_seconds() -> u64 {
    DEFAULT_TTL_SECONDS
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_sweep_interval_seconds() -> u64 {
    DEFAULT_SWEEP_INTERVAL_SECONDS
}

fn default_app_name() -> String {
    String::from("Login")
}
