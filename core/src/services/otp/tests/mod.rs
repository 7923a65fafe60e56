//! Tests for the passcode service
