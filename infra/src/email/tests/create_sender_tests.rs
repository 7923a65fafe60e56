//! Unit tests for email sender creation

use otp_shared::EmailConfig;

use crate::email::create_email_sender;

#[test]
fn test_create_mock_sender() {
    let sender = create_email_sender(&EmailConfig::default());
    assert_eq!(sender.provider_name(), "Mock");
}

#[test]
fn test_create_unknown_provider_fallback() {
    let config = EmailConfig {
        provider: "sendmail".to_string(),
        smtp: None,
    };

    assert_eq!(create_email_sender(&config).provider_name(), "Mock");
}

#[cfg(feature = "smtp-email")]
#[test]
fn test_create_smtp_without_settings_falls_back() {
    let config = EmailConfig {
        provider: "smtp".to_string(),
        smtp: None,
    };

    assert_eq!(create_email_sender(&config).provider_name(), "Mock");
}

#[cfg(feature = "smtp-email")]
#[test]
fn test_create_smtp_sender() {
    use otp_shared::config::SmtpSettings;

    let config = EmailConfig {
        provider: "smtp".to_string(),
        smtp: Some(SmtpSettings {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: None,
            password: None,
            from_address: "no-reply@example.com".to_string(),
            starttls: true,
        }),
    };

    assert_eq!(create_email_sender(&config).provider_name(), "SMTP");
}
