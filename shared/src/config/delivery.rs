//! Delivery provider configuration for email and SMS

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

/// Email and SMS provider settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeliveryConfig {
    /// Email provider settings
    pub email: EmailConfig,
    /// SMS provider settings
    pub sms: SmsConfig,
}

impl DeliveryConfig {
    pub fn from_env() -> Self {
        Self {
            email: EmailConfig::from_env(),
            sms: SmsConfig::from_env(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.email.validate()?;
        self.sms.validate()
    }
}

/// Email provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Email provider ("smtp", "mock")
    pub provider: String,
    /// SMTP settings, required when the provider is "smtp"
    #[serde(default)]
    pub smtp: Option<SmtpSettings>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            smtp: None,
        }
    }
}

impl EmailConfig {
    /// Reads `EMAIL_PROVIDER` and the `SMTP_*` variables
    pub fn from_env() -> Self {
        let provider = std::env::var("EMAIL_PROVIDER")
            .unwrap_or_else(|_| String::from("mock"))
            .to_lowercase();
        let smtp = std::env::var("SMTP_HOST").ok().map(|host| SmtpSettings {
            host,
            port: env_or("SMTP_PORT", 587),
            username: std::env::var("SMTP_USERNAME").ok(),
            password: std::env::var("SMTP_PASSWORD").ok(),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| String::from("no-reply@localhost")),
            starttls: std::env::var("SMTP_STARTTLS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        });

        Self { provider, smtp }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider == "smtp" && self.smtp.is_none() {
            return Err(ConfigError::new(
                "SMTP_HOST",
                "required when EMAIL_PROVIDER=smtp",
            ));
        }
        Ok(())
    }
}

/// SMTP connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpSettings {
    /// SMTP server hostname
    pub host: String,
    /// SMTP server port (587 for STARTTLS)
    pub port: u16,
    /// Username for authentication
    pub username: Option<String>,
    /// Password for authentication
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// Sender address
    pub from_address: String,
    /// Use STARTTLS instead of implicit TLS
    pub starttls: bool,
}

/// SMS provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS provider ("twilio", "mock")
    pub provider: String,
    /// Twilio settings, required when the provider is "twilio"
    #[serde(default)]
    pub twilio: Option<TwilioSettings>,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            twilio: None,
        }
    }
}

impl SmsConfig {
    /// Reads `SMS_PROVIDER` and the `TWILIO_*` variables
    pub fn from_env() -> Self {
        let provider = std::env::var("SMS_PROVIDER")
            .unwrap_or_else(|_| String::from("mock"))
            .to_lowercase();

        let twilio = match (
            std::env::var("TWILIO_ACCOUNT_SID"),
            std::env::var("TWILIO_AUTH_TOKEN"),
            std::env::var("TWILIO_FROM_NUMBER"),
        ) {
            (Ok(account_sid), Ok(auth_token), Ok(from_number)) => Some(TwilioSettings {
                account_sid,
                auth_token,
                from_number,
                max_retries: env_or("TWILIO_MAX_RETRIES", 3),
                retry_delay_ms: env_or("TWILIO_RETRY_DELAY_MS", 1000),
                request_timeout_secs: env_or("TWILIO_REQUEST_TIMEOUT_SECS", 30),
            }),
            _ => None,
        };

        Self { provider, twilio }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider != "twilio" {
            return Ok(());
        }
        match &self.twilio {
            None => Err(ConfigError::new(
                "TWILIO_ACCOUNT_SID",
                "Twilio credentials are required when SMS_PROVIDER=twilio",
            )),
            Some(twilio) if !twilio.from_number.starts_with('+') => Err(ConfigError::new(
                "TWILIO_FROM_NUMBER",
                "must be in E.164 format (starting with '+')",
            )),
            Some(_) => Ok(()),
        }
    }
}

/// Twilio account settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TwilioSettings {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    #[serde(skip_serializing)]
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Maximum send attempts for retryable failures
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}
