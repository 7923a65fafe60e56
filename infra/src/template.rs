//! Passcode message texts

use otp_shared::OtpConfig;

/// Settings used to word outgoing passcode messages
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    /// Product name shown to the recipient
    pub app_name: String,
    /// Code lifetime in whole minutes, rounded up
    pub ttl_minutes: u64,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::from(&OtpConfig::default())
    }
}

impl From<&OtpConfig> for MessageTemplate {
    fn from(config: &OtpConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            ttl_minutes: config.ttl_minutes(),
        }
    }
}

impl MessageTemplate {
    pub fn email_subject(&self) -> String {
        format!("Your {} verification code", self.app_name)
    }

    pub fn email_body(&self, code: &str, display_name: Option<&str>) -> String {
        let greeting = match display_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => format!("Hello {},", name),
            None => "Hello,".to_string(),
        };

        format!(
            "{greeting}\n\n\
             Your {app} verification code is: {code}\n\n\
             This code expires in {ttl} minutes. If you did not request it, you can ignore this email.\n",
            greeting = greeting,
            app = self.app_name,
            code = code,
            ttl = self.ttl_minutes,
        )
    }

    pub fn sms_body(&self, code: &str) -> String {
        format!(
            "Your {} verification code is: {}. It expires in {} minutes.",
            self.app_name, code, self.ttl_minutes
        )
    }
}
