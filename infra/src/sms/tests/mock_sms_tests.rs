//! Unit tests for mock SMS sender

use crate::sms::{MockSmsSender, SmsSender};
use crate::template::MessageTemplate;
use crate::InfrastructureError;

#[tokio::test]
async fn test_mock_sms_send_success() {
    let sender = MockSmsSender::new();
    let result = sender.send_sms("+14155552671", "Test message").await;

    let message_id = result.unwrap();
    assert!(message_id.starts_with("mock_"));
    assert_eq!(sender.get_message_count(), 1);
}

#[tokio::test]
async fn test_mock_sms_invalid_phone() {
    let sender = MockSmsSender::new();
    let result = sender.send_sms("1234567890", "Test message").await;

    if let Err(InfrastructureError::Sms(msg)) = result {
        assert!(msg.contains("Invalid phone number"));
        assert!(!msg.contains("1234567890"));
    } else {
        panic!("Expected Sms error");
    }
    assert_eq!(sender.get_message_count(), 0);
}

#[tokio::test]
async fn test_mock_sms_simulate_failure() {
    let sender = MockSmsSender::failing();

    let result = sender.send_sms("+14155552671", "Test message").await;
    assert!(matches!(result, Err(InfrastructureError::Sms(_))));
    assert_eq!(sender.get_message_count(), 0);

    sender.set_simulate_failure(false);
    assert!(sender.send_sms("+14155552671", "Test message").await.is_ok());
}

#[tokio::test]
async fn test_mock_sms_otp_message() {
    let sender = MockSmsSender::new();
    let result = sender
        .send_otp_sms("+14155552671", "123456", &MessageTemplate::default())
        .await;

    assert!(result.is_ok());
    assert_eq!(sender.get_message_count(), 1);
}

#[tokio::test]
async fn test_mock_sms_counter() {
    let sender = MockSmsSender::new();

    for i in 1..=3 {
        let _ = sender
            .send_sms("+14155552671", &format!("Message {}", i))
            .await;
        assert_eq!(sender.get_message_count(), i);
    }

    sender.reset_counter();
    assert_eq!(sender.get_message_count(), 0);
}
