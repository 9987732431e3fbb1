use crate::config::constants::{defaults, placeholders, urls};
use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Resend delivery settings (`email` section)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EmailConfig {
    /// API key; `RESEND_API_KEY` overrides it
    #[serde(default)]
    pub api_key: String,

    /// Sender address; `SENDER_EMAIL` overrides it
    #[serde(default)]
    pub from_email: String,

    /// Recipient address; `RECIPIENT_EMAIL` overrides it
    #[serde(default)]
    pub recipient_email: String,

    /// Subject prefix. When empty the subject carries the date instead of the topic.
    #[serde(default)]
    pub subject_prefix: String,

    /// Display name placed in front of the sender address
    #[serde(default = "default_sender_name")]
    pub sender_name: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_sender_name() -> String {
    defaults::DEFAULT_SENDER_NAME.to_string()
}
fn default_base_url() -> String {
    urls::RESEND_API_BASE.to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            from_email: String::new(),
            recipient_email: String::new(),
            subject_prefix: String::new(),
            sender_name: default_sender_name(),
            base_url: default_base_url(),
        }
    }
}

impl EmailConfig {
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        super::require_value(
            &self.api_key,
            "email.api_key",
            Some(placeholders::RESEND_API_KEY),
        )
    }

    /// Sender and recipient addresses, in that order
    pub fn require_addresses(&self) -> Result<(&str, &str), ConfigError> {
        let from = super::require_value(&self.from_email, "email.from_email", None)?;
        let to = super::require_value(&self.recipient_email, "email.recipient_email", None)?;
        Ok((from, to))
    }

    /// `"Name <address>"` form used in the `from` header
    pub fn sender_mailbox(&self) -> Result<String, ConfigError> {
        let (from, _) = self.require_addresses()?;
        let name = self.sender_name.trim();
        if name.is_empty() {
            Ok(from.to_string())
        } else {
            Ok(format!("{name} <{from}>"))
        }
    }
}
