//! Unit tests for the Twilio sender that need no network

use crate::sms::{SmsSender, TwilioConfig, TwilioSmsSender};
use crate::InfrastructureError;

fn unreachable_config() -> TwilioConfig {
    TwilioConfig {
        account_sid: "ACtest".to_string(),
        auth_token: "token".to_string(),
        from_number: "+15551234567".to_string(),
        max_retries: 2,
        retry_delay_ms: 1,
        request_timeout_secs: 2,
        // Nothing listens on the discard port; connections are refused
        api_base: "http://127.0.0.1:9".to_string(),
    }
}

#[tokio::test]
async fn test_rejects_non_e164_recipient() {
    let sender = TwilioSmsSender::new(unreachable_config()).unwrap();

    let result = sender.send_sms("4155552671", "hello").await;
    match result {
        Err(InfrastructureError::Sms(msg)) => assert!(msg.contains("E.164")),
        other => panic!("Expected Sms error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rejects_oversized_message() {
    let sender = TwilioSmsSender::new(unreachable_config()).unwrap();

    let body = "x".repeat(1601);
    let result = sender.send_sms("+14155552671", &body).await;
    match result {
        Err(InfrastructureError::Sms(msg)) => assert!(msg.contains("maximum length")),
        other => panic!("Expected Sms error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_failures_are_retried_then_reported() {
    let sender = TwilioSmsSender::new(unreachable_config()).unwrap();

    let result = sender.send_sms("+14155552671", "hello").await;
    match result {
        Err(InfrastructureError::Sms(msg)) => {
            assert!(msg.contains("after 2 attempts"), "unexpected message: {}", msg)
        }
        other => panic!("Expected Sms error, got {:?}", other),
    }
}

#[test]
fn test_provider_name() {
    let sender = TwilioSmsSender::new(unreachable_config()).unwrap();
    assert_eq!(sender.provider_name(), "Twilio");
}
