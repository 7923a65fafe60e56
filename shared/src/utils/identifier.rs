//! Identifier utilities
//!
//! An identifier is the key a passcode is issued under: an email address or
//! an E.164 phone number. Helpers here validate both shapes and mask them
//! before they reach a log line.

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static E164_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{7,14}$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$").unwrap()
});

/// Longest address accepted (RFC 5321 path limit)
const MAX_EMAIL_LENGTH: usize = 254;

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid E.164 (after normalization)
///
/// Only digits, `+` and the formatting characters space, `(`, `)`, `-` and
/// `.` may appear; anything else rejects the number outright.
pub fn is_valid_phone(phone: &str) -> bool {
    phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '(' | ')' | '-' | '.'))
        && E164_PHONE_REGEX.is_match(&normalize_phone_number(phone))
}

/// Check if an email address is syntactically valid
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Mask a phone number for logging, keeping the last 4 digits
///
/// `+14155552671` becomes `+*******2671`.
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() <= 4 {
        return "*".repeat(normalized.len());
    }

    let visible = &normalized[normalized.len() - 4..];
    let masked_count = normalized.len() - 4;

    if normalized.starts_with('+') {
        format!("+{}{}", "*".repeat(masked_count - 1), visible)
    } else {
        format!("{}{}", "*".repeat(masked_count), visible)
    }
}

/// Mask an email address for logging, keeping the first character and the domain
///
/// `alice@example.com` becomes `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

/// Mask any identifier, choosing the email or phone scheme by shape
pub fn mask_identifier(identifier: &str) -> String {
    if identifier.contains('@') {
        mask_email(identifier)
    } else {
        mask_phone_number(identifier)
    }
}
