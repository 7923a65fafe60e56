//! Passcode service: issue, deliver and verify

use chrono::Utc;
use std::sync::Arc;

use otp_shared::identifier::mask_identifier;

use crate::domain::{canonical_identifier, DeliveryChannel, VerificationOutcome};
use crate::errors::{DomainError, DomainResult};

use super::config::OtpServiceConfig;
use super::generator::{CodeGenerator, SecureCodeGenerator};
use super::store::OtpStore;
use super::sweeper::ExpirySweeper;
use super::traits::OtpSenderTrait;
use super::types::SendCodeResult;
use super::verifier::Verifier;

/// Passcode service handling issue, delivery and verification
pub struct OtpService<E: OtpSenderTrait, S: OtpSenderTrait> {
    /// Shared record store
    store: Arc<OtpStore>,
    /// Verification policy over the store
    verifier: Verifier,
    /// Code source
    generator: Box<dyn CodeGenerator>,
    /// Sender for email identifiers
    email_sender: Arc<E>,
    /// Sender for phone identifiers
    sms_sender: Arc<S>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<E: OtpSenderTrait, S: OtpSenderTrait> OtpService<E, S> {
    /// Create a new service with a fresh store and the OS-backed generator
    ///
    /// # Arguments
    ///
    /// * `email_sender` - Sender used for the email channel
    /// * `sms_sender` - Sender used for the SMS channel
    /// * `config` - Service configuration
    pub fn new(email_sender: Arc<E>, sms_sender: Arc<S>, config: OtpServiceConfig) -> Self {
        let store = Arc::new(OtpStore::new(config.ttl));
        Self::with_parts(store, Box::new(SecureCodeGenerator), email_sender, sms_sender, config)
    }

    /// Create a service over an existing store and generator
    pub fn with_parts(
        store: Arc<OtpStore>,
        generator: Box<dyn CodeGenerator>,
        email_sender: Arc<E>,
        sms_sender: Arc<S>,
        config: OtpServiceConfig,
    ) -> Self {
        let verifier = Verifier::new(store.clone(), config.max_attempts);
        Self {
            store,
            verifier,
            generator,
            email_sender,
            sms_sender,
            config,
        }
    }

    /// The store shared with the sweeper
    pub fn store(&self) -> Arc<OtpStore> {
        self.store.clone()
    }

    /// Build an expiry sweeper over this service's store
    pub fn sweeper(&self) -> ExpirySweeper {
        ExpirySweeper::new(self.store.clone(), self.config.sweep_interval)
    }

    /// Issue a new code for `identifier` and deliver it
    ///
    /// This method:
    /// 1. Rejects an empty identifier
    /// 2. Resolves the channel (explicit or detected) and validates the identifier for it
    /// 3. Generates and stores a fresh code, replacing any previous one
    /// 4. Delivers the code with no store lock held
    /// 5. Revokes the code if delivery fails
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - Channel, provider message id and expiry
    /// * `Err(DomainError)` - If input is invalid or delivery fails
    pub async fn send_code(
        &self,
        identifier: &str,
        channel: Option<DeliveryChannel>,
        display_name: Option<&str>,
    ) -> DomainResult<SendCodeResult> {
        let identifier = canonical_identifier(identifier);
        if identifier.is_empty() {
            return Err(DomainError::missing("identifier"));
        }

        let channel = match channel {
            Some(channel) if channel.accepts(&identifier) => channel,
            Some(channel) => {
                return Err(DomainError::validation(format!(
                    "Identifier is not a valid {} recipient",
                    channel
                )));
            }
            None => DeliveryChannel::detect(&identifier).ok_or_else(|| {
                DomainError::validation("Identifier must be an email address or E.164 phone number")
            })?,
        };

        let code = self.generator.generate();
        let record = self.store.issue(&identifier, &code);

        tracing::info!(
            identifier = %mask_identifier(&identifier),
            channel = %channel,
            expires_at = %record.expires_at,
            event = "otp_issued",
            "Issued new OTP"
        );

        let delivery = match channel {
            DeliveryChannel::Email => {
                self.email_sender
                    .send_code(&identifier, &code, display_name)
                    .await
            }
            DeliveryChannel::Sms => {
                self.sms_sender
                    .send_code(&identifier, &code, display_name)
                    .await
            }
        };

        match delivery {
            Ok(message_id) => {
                tracing::info!(
                    identifier = %mask_identifier(&identifier),
                    channel = %channel,
                    message_id = %message_id,
                    event = "otp_delivered",
                    "Delivered OTP"
                );
                Ok(SendCodeResult {
                    channel,
                    message_id,
                    expires_at: record.expires_at,
                    expires_in: record.time_until_expiration(Utc::now()),
                })
            }
            Err(message) => {
                let revoked = self.store.revoke(&identifier, &code, record.issued_at);
                tracing::error!(
                    identifier = %mask_identifier(&identifier),
                    channel = %channel,
                    error = %message,
                    revoked = revoked,
                    event = "otp_delivery_failed",
                    "Failed to deliver OTP"
                );
                Err(DomainError::DeliveryFailure { channel, message })
            }
        }
    }

    /// Verify a submitted code
    ///
    /// Expected rejections (mismatch, expiry, lockout, unknown identifier) are
    /// returned as [`VerificationOutcome`] values; only missing input is an error.
    pub async fn verify_code(&self, identifier: &str, code: &str) -> DomainResult<VerificationOutcome> {
        let identifier = canonical_identifier(identifier);
        if identifier.is_empty() {
            return Err(DomainError::missing("identifier"));
        }
        let code = code.trim();
        if code.is_empty() {
            return Err(DomainError::missing("code"));
        }

        let outcome = self.verifier.verify(&identifier, code);

        match outcome {
            VerificationOutcome::Success => tracing::info!(
                identifier = %mask_identifier(&identifier),
                outcome = outcome.as_str(),
                event = "otp_verified",
                "OTP verified"
            ),
            VerificationOutcome::LockedOut => tracing::warn!(
                identifier = %mask_identifier(&identifier),
                outcome = outcome.as_str(),
                event = "otp_locked_out",
                "OTP attempt limit reached"
            ),
            _ => tracing::debug!(
                identifier = %mask_identifier(&identifier),
                outcome = outcome.as_str(),
                event = "otp_rejected",
                "OTP verification rejected"
            ),
        }

        Ok(outcome)
    }
}
