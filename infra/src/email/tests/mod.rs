//! Unit tests for email module

#[cfg(test)]
pub mod create_sender_tests;
