//! Unit tests for the SMS adapter

use otp_core::services::otp::OtpSenderTrait;

use crate::sms::{MockSmsSender, SmsSender, SmsSenderAdapter};
use crate::template::MessageTemplate;

#[tokio::test]
async fn test_adapter_delivers_through_inner_sender() {
    let adapter = SmsSenderAdapter::new(Box::new(MockSmsSender::new()), MessageTemplate::default());

    let message_id = adapter
        .send_code("+14155552671", "482913", None)
        .await
        .unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(OtpSenderTrait::provider_name(&adapter), "Mock");
}

#[tokio::test]
async fn test_adapter_maps_errors_to_strings() {
    let adapter = SmsSenderAdapter::new(Box::new(MockSmsSender::failing()), MessageTemplate::default());

    let err = adapter
        .send_code("+14155552671", "482913", None)
        .await
        .unwrap_err();

    assert!(err.contains("Simulated SMS delivery failure"));
}

#[tokio::test]
async fn test_adapter_over_boxed_trait_object() {
    let inner: Box<dyn SmsSender> = Box::new(MockSmsSender::new());
    let adapter = SmsSenderAdapter::new(inner, MessageTemplate::default());

    assert!(adapter.send_code("+14155552671", "482913", None).await.is_ok());
}
