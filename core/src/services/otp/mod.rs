//! One-time passcode service module
//!
//! This module provides the complete passcode lifecycle:
//! - Code generation from the OS random source
//! - An in-memory store keyed by identifier with expiry and attempt tracking
//! - Verification with attempt caps and lockout
//! - A cancellable background sweeper evicting expired records
//! - Orchestration of issue and delivery over email or SMS

mod config;
mod generator;
mod service;
mod store;
mod sweeper;
mod traits;
mod types;
mod verifier;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use generator::{CodeGenerator, SecureCodeGenerator, CODE_LENGTH};
pub use service::OtpService;
pub use store::{OtpStore, RecordAction};
pub use sweeper::{ExpirySweeper, SweepResult};
pub use traits::OtpSenderTrait;
pub use types::SendCodeResult;
pub use verifier::Verifier;
