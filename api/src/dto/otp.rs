use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Email address or E.164 phone number
    /// Examples: "alice@example.com", "+14155552671"
    #[serde(default)]
    #[validate(length(max = 320))]
    pub identifier: String,

    /// Delivery channel, "email" or "sms"; detected from the identifier when absent
    #[serde(default)]
    pub channel: Option<String>,

    /// Name used to greet the recipient in email messages
    #[serde(default)]
    #[validate(length(max = 100))]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// Identifier the code was sent to
    #[serde(default)]
    #[validate(length(max = 320))]
    pub identifier: String,

    /// The code received by the user
    #[serde(default)]
    #[validate(length(max = 32))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub message: String,
    pub channel: String,
    pub expires_in: i64, // seconds until the code expires
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub message: String,
    pub verified: bool,
}
