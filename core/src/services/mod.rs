//! Business services containing domain logic and use cases.

pub mod otp;

// Re-export commonly used types
pub use otp::{
    CodeGenerator, ExpirySweeper, OtpSenderTrait, OtpService, OtpServiceConfig, OtpStore,
    RecordAction, SecureCodeGenerator, SendCodeResult, SweepResult, Verifier,
};
