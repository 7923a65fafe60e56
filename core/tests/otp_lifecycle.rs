//! Integration tests for the passcode lifecycle: issue, verify, expire, sweep

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use tokio_util::sync::CancellationToken;

use otp_core::services::otp::{
    ExpirySweeper, OtpSenderTrait, OtpService, OtpServiceConfig, OtpStore, Verifier,
};
use otp_core::{DeliveryChannel, VerificationOutcome};

// Sender capturing every delivered code in order
#[derive(Default)]
struct CapturingSender {
    delivered: Mutex<Vec<(String, String)>>,
}

impl CapturingSender {
    fn last_code_for(&self, recipient: &str) -> Option<String> {
        self.delivered
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == recipient)
            .map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl OtpSenderTrait for CapturingSender {
    async fn send_code(
        &self,
        recipient: &str,
        code: &str,
        _display_name: Option<&str>,
    ) -> Result<String, String> {
        self.delivered
            .lock()
            .unwrap()
            .push((recipient.to_string(), code.to_string()));
        Ok(format!("captured-{}", uuid::Uuid::new_v4()))
    }

    fn provider_name(&self) -> &str {
        "capturing"
    }
}

#[tokio::test]
async fn test_email_round_trip() {
    let email = Arc::new(CapturingSender::default());
    let sms = Arc::new(CapturingSender::default());
    let service = OtpService::new(email.clone(), sms, OtpServiceConfig::default());

    let sent = service.send_code("a@x.com", None, None).await.unwrap();
    assert_eq!(sent.channel, DeliveryChannel::Email);

    let code = email.last_code_for("a@x.com").unwrap();
    assert_eq!(
        service.verify_code("a@x.com", &code).await.unwrap(),
        VerificationOutcome::Success
    );
    assert_eq!(
        service.verify_code("a@x.com", &code).await.unwrap(),
        VerificationOutcome::NotFound
    );
}

#[tokio::test]
async fn test_sms_wrong_then_right() {
    let email = Arc::new(CapturingSender::default());
    let sms = Arc::new(CapturingSender::default());
    let service = OtpService::new(email, sms.clone(), OtpServiceConfig::default());

    service.send_code("+14155552671", None, None).await.unwrap();
    let code = sms.last_code_for("+14155552671").unwrap();
    let wrong = if code == "999999" { "100000" } else { "999999" };

    assert_eq!(
        service.verify_code("+14155552671", wrong).await.unwrap(),
        VerificationOutcome::Mismatch { remaining_attempts: 2 }
    );
    assert_eq!(
        service.verify_code("+14155552671", &code).await.unwrap(),
        VerificationOutcome::Success
    );
}

#[test]
fn test_expired_record_is_rejected_and_removed() {
    let store = Arc::new(OtpStore::new(ChronoDuration::minutes(10)));
    let verifier = Verifier::new(store.clone(), 3);
    let t0 = Utc::now();

    store.issue_at("a@x.com", "123456", t0);

    let eleven_minutes_later = t0 + ChronoDuration::minutes(11);
    assert_eq!(
        verifier.verify_at("a@x.com", "123456", eleven_minutes_later),
        VerificationOutcome::Expired
    );
    assert_eq!(
        verifier.verify_at("a@x.com", "123456", eleven_minutes_later),
        VerificationOutcome::NotFound
    );
}

#[test]
fn test_sweep_then_verify_is_not_found() {
    let store = Arc::new(OtpStore::new(ChronoDuration::minutes(10)));
    let verifier = Verifier::new(store.clone(), 3);
    let sweeper = ExpirySweeper::new(store.clone(), Duration::from_secs(300));
    let t0 = Utc::now();

    store.issue_at("a@x.com", "123456", t0);
    store.issue_at("b@x.com", "654321", t0 + ChronoDuration::minutes(5));

    let result = sweeper.run_once(t0 + ChronoDuration::minutes(11));
    assert_eq!(result.removed, 1);
    assert_eq!(result.remaining, 1);

    assert_eq!(
        verifier.verify_at("a@x.com", "123456", t0 + ChronoDuration::minutes(11)),
        VerificationOutcome::NotFound
    );
    assert_eq!(
        verifier.verify_at("b@x.com", "654321", t0 + ChronoDuration::minutes(11)),
        VerificationOutcome::Success
    );
}

#[tokio::test(start_paused = true)]
async fn test_spawned_sweeper_evicts_on_interval() {
    let store = Arc::new(OtpStore::new(ChronoDuration::minutes(10)));
    let cancel = CancellationToken::new();

    // Already past expiry by the wall clock the sweeper reads
    store.issue_at("stale@x.com", "123456", Utc::now() - ChronoDuration::minutes(20));
    store.issue("fresh@x.com", "654321");

    let interval = Duration::from_secs(300);
    let handle = ExpirySweeper::new(store.clone(), interval).spawn(cancel.clone());

    // Paused clock: each sleep auto-advances virtual time
    let mut waited = Duration::ZERO;
    while store.len() == 2 && waited <= interval * 2 {
        tokio::time::sleep(Duration::from_secs(1)).await;
        waited += Duration::from_secs(1);
    }
    assert!(waited >= interval);
    assert!(store.lookup("stale@x.com").is_none());
    assert!(store.lookup("fresh@x.com").is_some());

    cancel.cancel();
    handle.await.unwrap();
}
