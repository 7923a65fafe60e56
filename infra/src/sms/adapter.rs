//! Adapter implementing the core `OtpSenderTrait` for any [`SmsSender`]

use async_trait::async_trait;
use otp_core::services::otp::OtpSenderTrait;

use super::sms_sender::SmsSender;
use crate::template::MessageTemplate;

/// Bridges an infrastructure SMS sender to the core sender trait
pub struct SmsSenderAdapter<T: SmsSender + ?Sized> {
    inner: Box<T>,
    template: MessageTemplate,
}

impl<T: SmsSender + ?Sized> SmsSenderAdapter<T> {
    pub fn new(inner: Box<T>, template: MessageTemplate) -> Self {
        Self { inner, template }
    }
}

#[async_trait]
impl<T: SmsSender + ?Sized> OtpSenderTrait for SmsSenderAdapter<T> {
    // SMS bodies stay short; the display name is not used.
    async fn send_code(
        &self,
        recipient: &str,
        code: &str,
        _display_name: Option<&str>,
    ) -> Result<String, String> {
        self.inner
            .send_otp_sms(recipient, code, &self.template)
            .await
            .map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}
