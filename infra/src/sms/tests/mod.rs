//! Unit tests for SMS module

#[cfg(test)]
pub mod adapter_tests;
#[cfg(test)]
pub mod mock_sms_tests;
#[cfg(all(test, feature = "twilio-sms"))]
pub mod twilio_tests;
