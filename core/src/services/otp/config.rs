//! Configuration for the passcode service

use chrono::Duration;
use otp_shared::config::otp::{MAX_SWEEP_INTERVAL_SECONDS, MAX_TTL_SECONDS};
use otp_shared::OtpConfig;

/// Configuration for the passcode service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Lifetime of an issued code
    pub ttl: Duration,
    /// Mismatched attempts tolerated before lockout
    pub max_attempts: u32,
    /// How often the sweeper evicts expired records
    pub sweep_interval: std::time::Duration,
    /// Application name used in delivered messages
    pub app_name: String,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::minutes(10),
            max_attempts: 3,
            sweep_interval: std::time::Duration::from_secs(300), // Run every 5 minutes
            app_name: "Login".to_string(),
        }
    }
}

// Values past the validated bounds are clamped so conversion can never wrap.
impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        let ttl = i64::try_from(config.ttl_seconds.min(MAX_TTL_SECONDS))
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or_else(|| Duration::seconds(MAX_TTL_SECONDS as i64));

        Self {
            ttl,
            max_attempts: config.max_attempts,
            sweep_interval: std::time::Duration::from_secs(
                config.sweep_interval_seconds.min(MAX_SWEEP_INTERVAL_SECONDS),
            ),
            app_name: config.app_name.clone(),
        }
    }
}
