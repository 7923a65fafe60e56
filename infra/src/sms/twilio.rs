//! Twilio SMS sender
//!
//! Posts to the Twilio Messages REST endpoint with reqwest. Rate-limit (429)
//! and server (5xx) responses are retried with exponential backoff, as are
//! connection failures and timeouts. Other client errors fail immediately.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use otp_shared::config::TwilioSettings;
use otp_shared::identifier::{is_valid_phone, mask_phone_number, normalize_phone_number};

use super::sms_sender::SmsSender;
use crate::InfrastructureError;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Longest body Twilio accepts
const MAX_MESSAGE_LENGTH: usize = 1600;

/// Twilio SMS sender configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Maximum send attempts, including the first
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
    /// API base URL
    pub api_base: String,
}

impl TwilioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let settings = otp_shared::SmsConfig::from_env().twilio.ok_or_else(|| {
            InfrastructureError::Config(
                "TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN and TWILIO_FROM_NUMBER must be set"
                    .to_string(),
            )
        })?;
        Self::try_from(&settings)
    }
}

impl TryFrom<&TwilioSettings> for TwilioConfig {
    type Error = InfrastructureError;

    fn try_from(settings: &TwilioSettings) -> Result<Self, Self::Error> {
        if !settings.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "TWILIO_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid: settings.account_sid.clone(),
            auth_token: settings.auth_token.clone(),
            from_number: settings.from_number.clone(),
            max_retries: settings.max_retries.max(1),
            retry_delay_ms: settings.retry_delay_ms,
            request_timeout_secs: settings.request_timeout_secs,
            api_base: TWILIO_API_BASE.to_string(),
        })
    }
}

/// Subset of the Twilio message resource we read back
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

/// How a failed attempt should be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryDecision {
    Retry,
    GiveUp,
}

fn classify_status(status: StatusCode) -> RetryDecision {
    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        RetryDecision::Retry
    } else {
        RetryDecision::GiveUp
    }
}

fn classify_transport_error(error: &reqwest::Error) -> RetryDecision {
    if error.is_timeout() || error.is_connect() {
        RetryDecision::Retry
    } else {
        RetryDecision::GiveUp
    }
}

/// Twilio SMS sender
pub struct TwilioSmsSender {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsSender {
    /// Create a new Twilio sender
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "Twilio SMS sender initialized with from number: {}",
            mask_phone_number(&config.from_number)
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(TwilioConfig::from_env()?)
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            self.config.api_base.trim_end_matches('/'),
            self.config.account_sid
        )
    }

    /// Send SMS with retry logic
    async fn send_with_retry(&self, to: &str, message: &str) -> Result<String, InfrastructureError> {
        let url = self.messages_url();
        let form = [
            ("To", to),
            ("From", self.config.from_number.as_str()),
            ("Body", message),
        ];

        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                "Sending SMS attempt {}/{} to {}",
                attempts,
                self.config.max_retries,
                mask_phone_number(to)
            );

            let response = self
                .client
                .post(&url)
                .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
                .form(&form)
                .send()
                .await;

            let failure = match response {
                Ok(response) if response.status().is_success() => {
                    let resource: MessageResource = response.json().await?;
                    info!(
                        "SMS sent successfully to {} with SID: {}",
                        mask_phone_number(to),
                        resource.sid
                    );
                    return Ok(resource.sid);
                }
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    error!(
                        "Twilio rejected SMS (attempt {}/{}): {} {}",
                        attempts, self.config.max_retries, status, body
                    );
                    (classify_status(status), format!("Twilio returned {}", status))
                }
                Err(e) => {
                    error!(
                        "Failed to reach Twilio (attempt {}/{}): {}",
                        attempts, self.config.max_retries, e
                    );
                    (classify_transport_error(&e), e.to_string())
                }
            };

            match failure {
                (RetryDecision::GiveUp, reason) => {
                    return Err(InfrastructureError::Sms(format!("Invalid request: {}", reason)));
                }
                (RetryDecision::Retry, reason) if attempts >= self.config.max_retries => {
                    return Err(InfrastructureError::Sms(format!(
                        "Failed to send SMS after {} attempts: {}",
                        attempts, reason
                    )));
                }
                (RetryDecision::Retry, _) => {
                    warn!("Retrying SMS send after {:?}", delay);
                    tokio::time::sleep(delay).await;
                    delay *= 2; // Exponential backoff
                }
            }
        }
    }
}

#[async_trait]
impl SmsSender for TwilioSmsSender {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        if !is_valid_phone(phone_number) {
            return Err(InfrastructureError::Sms(
                "Phone number must be in E.164 format (e.g., +1234567890)".to_string(),
            ));
        }
        let normalized_phone = normalize_phone_number(phone_number);

        if message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        info!(
            "Sending SMS to {} via Twilio (message length: {} chars)",
            mask_phone_number(&normalized_phone),
            message.len()
        );

        self.send_with_retry(&normalized_phone, message).await
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
