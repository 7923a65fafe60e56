//! # OTP Core
//!
//! Domain layer for one-time passcode login verification.
//! This crate contains the passcode record entity, verification outcomes,
//! domain errors, and the services that generate, store, verify and sweep
//! passcodes. Delivery providers plug in through [`services::otp::OtpSenderTrait`].

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
