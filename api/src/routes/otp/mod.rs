//! Passcode route handlers
//!
//! This module contains the passcode endpoints:
//! - Sending a code to an email address or phone number
//! - Verifying a submitted code

pub mod send_code;
pub mod verify_code;

use actix_web::HttpRequest;
use std::sync::Arc;
use uuid::Uuid;

use otp_core::services::otp::{OtpSenderTrait, OtpService};

/// Application state that holds shared services
pub struct AppState<E, S>
where
    E: OtpSenderTrait,
    S: OtpSenderTrait,
{
    pub otp_service: Arc<OtpService<E, S>>,
}

impl<E: OtpSenderTrait, S: OtpSenderTrait> AppState<E, S> {
    pub fn new(otp_service: Arc<OtpService<E, S>>) -> Self {
        Self { otp_service }
    }
}

/// Request id from the `X-Request-ID` header, or a fresh one
pub(crate) fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get("X-Request-ID")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
