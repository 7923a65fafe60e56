//! Email sender trait

use async_trait::async_trait;

use crate::template::MessageTemplate;
use crate::InfrastructureError;

/// Common interface for email providers
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a plain-text email, returning the provider's message id
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError>;

    /// Send a passcode email worded by `template`
    async fn send_otp_email(
        &self,
        to: &str,
        code: &str,
        display_name: Option<&str>,
        template: &MessageTemplate,
    ) -> Result<String, InfrastructureError> {
        let subject = template.email_subject();
        let body = template.email_body(code, display_name);
        self.send_email(to, &subject, &body).await
    }

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
