//! Adapter implementing the core `OtpSenderTrait` for any [`EmailSender`]

use async_trait::async_trait;
use otp_core::services::otp::OtpSenderTrait;

use super::email_sender::EmailSender;
use crate::template::MessageTemplate;

/// Bridges an infrastructure email sender to the core sender trait
pub struct EmailSenderAdapter<T: EmailSender + ?Sized> {
    inner: Box<T>,
    template: MessageTemplate,
}

impl<T: EmailSender + ?Sized> EmailSenderAdapter<T> {
    pub fn new(inner: Box<T>, template: MessageTemplate) -> Self {
        Self { inner, template }
    }
}

#[async_trait]
impl<T: EmailSender + ?Sized> OtpSenderTrait for EmailSenderAdapter<T> {
    async fn send_code(
        &self,
        recipient: &str,
        code: &str,
        display_name: Option<&str>,
    ) -> Result<String, String> {
        self.inner
            .send_otp_email(recipient, code, display_name, &self.template)
            .await
            .map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}
