//! SMS sender trait

use async_trait::async_trait;

use crate::template::MessageTemplate;
use crate::InfrastructureError;

/// Common interface for SMS providers
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send a text message, returning the provider's message id
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    /// Send a passcode message worded by `template`
    async fn send_otp_sms(
        &self,
        phone_number: &str,
        code: &str,
        template: &MessageTemplate,
    ) -> Result<String, InfrastructureError> {
        self.send_sms(phone_number, &template.sms_body(code)).await
    }

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
