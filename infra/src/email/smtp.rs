//! SMTP email sender using lettre

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info};

use otp_shared::config::SmtpSettings;
use otp_shared::identifier::mask_email;

use super::email_sender::EmailSender;
use crate::InfrastructureError;

/// SMTP email sender
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    host: String,
    port: u16,
}

impl SmtpEmailSender {
    /// Create a new SMTP sender; no connection is made until the first send
    pub fn new(settings: &SmtpSettings) -> Result<Self, InfrastructureError> {
        let builder = if settings.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
        }
        .map_err(|e| InfrastructureError::Config(format!("Failed to create SMTP transport: {}", e)))?;

        let mut builder = builder.port(settings.port);
        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        let from: Mailbox = settings.from_address.parse().map_err(|e| {
            InfrastructureError::Config(format!(
                "Invalid SMTP_FROM address '{}': {}",
                settings.from_address, e
            ))
        })?;

        info!(
            "SMTP email sender initialized for {}:{}",
            settings.host, settings.port
        );

        Ok(Self {
            transport: builder.build(),
            from,
            host: settings.host.clone(),
            port: settings.port,
        })
    }

    /// Create from the `SMTP_*` environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let settings = otp_shared::EmailConfig::from_env()
            .smtp
            .ok_or_else(|| InfrastructureError::Config("SMTP_HOST not set".to_string()))?;
        Self::new(&settings)
    }

    fn build_message(&self, to: &str, subject: &str, body: &str) -> Result<(Message, String), InfrastructureError> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|e| InfrastructureError::Email(format!("Invalid recipient address: {}", e)))?;

        let message_id = format!("<{}@{}>", uuid::Uuid::new_v4(), self.from.email.domain());

        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .message_id(Some(message_id.clone()))
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| InfrastructureError::Email(format!("Failed to build email: {}", e)))?;

        Ok((message, message_id))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<String, InfrastructureError> {
        let (message, message_id) = self.build_message(to, subject, body)?;

        match self.transport.send(message).await {
            Ok(_) => {
                info!("Email sent to {} with id {}", mask_email(to), message_id);
                Ok(message_id)
            }
            Err(e) => {
                error!("Failed to send email to {}: {}", mask_email(to), e);
                Err(InfrastructureError::Email(format!("Failed to send email: {}", e)))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }
}

// AsyncSmtpTransport does not implement Debug
impl std::fmt::Debug for SmtpEmailSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpEmailSender")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}
