//! Trait definitions for delivery integrations

use async_trait::async_trait;

/// Trait for delivering a passcode to a recipient
///
/// Implemented by the infrastructure layer once per channel (email, SMS).
#[async_trait]
pub trait OtpSenderTrait: Send + Sync {
    /// Deliver `code` to `recipient`, returning the provider's message id
    async fn send_code(
        &self,
        recipient: &str,
        code: &str,
        display_name: Option<&str>,
    ) -> Result<String, String>;

    /// Name of the underlying provider, for logs
    fn provider_name(&self) -> &str;
}
