//! Shared helpers for route tests

#![allow(dead_code)]

use actix_web::web;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use otp_api::routes::otp::AppState;
use otp_core::services::otp::{OtpSenderTrait, OtpService, OtpServiceConfig};

/// Sender that remembers the last code per recipient
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<HashMap<String, String>>,
    fail: bool,
}

impl RecordingSender {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(HashMap::new()),
            fail: true,
        }
    }

    pub fn code_for(&self, recipient: &str) -> Option<String> {
        self.sent.lock().unwrap().get(recipient).cloned()
    }
}

#[async_trait]
impl OtpSenderTrait for RecordingSender {
    async fn send_code(
        &self,
        recipient: &str,
        code: &str,
        _display_name: Option<&str>,
    ) -> Result<String, String> {
        if self.fail {
            return Err("provider unavailable".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .insert(recipient.to_string(), code.to_string());
        Ok(format!("test-{}", recipient))
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

pub type TestState = AppState<RecordingSender, RecordingSender>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub email: Arc<RecordingSender>,
    pub sms: Arc<RecordingSender>,
}

pub fn context_with(email: RecordingSender, sms: RecordingSender) -> TestContext {
    let email = Arc::new(email);
    let sms = Arc::new(sms);
    let service = OtpService::new(email.clone(), sms.clone(), OtpServiceConfig::default());
    TestContext {
        state: web::Data::new(AppState::new(Arc::new(service))),
        email,
        sms,
    }
}

pub fn context() -> TestContext {
    context_with(RecordingSender::default(), RecordingSender::default())
}
