use super::{EmailError, EmailMessage, EmailSender, SendReceipt};
use crate::config::{ConfigError, EmailConfig};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

/// Resend transactional email API client
pub struct ResendClient {
    api_key: String,
    http_client: HttpClient,
    base_url: String,
}

impl ResendClient {
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from the `email` section, rejecting an unset key
    pub fn from_config(config: &EmailConfig) -> Result<Self, ConfigError> {
        let api_key = config.require_api_key()?.to_string();
        Ok(Self::with_base_url(api_key, config.base_url.clone()))
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    fn name(&self) -> &str {
        "resend"
    }

    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, EmailError> {
        let url = format!("{}/emails", self.base_url);
        debug!(%url, to = ?message.to, subject = %message.subject, "sending email");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await
            .map_err(|e| EmailError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "email provider rejected the request");
            return Err(EmailError::Provider(format!("HTTP {status}: {body}")));
        }

        response
            .json::<SendReceipt>()
            .await
            .map_err(|e| EmailError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serializes_to_resend_shape() {
        let message = EmailMessage {
            from: "Course Generator <bot@example.com>".to_string(),
            to: vec!["me@example.com".to_string()],
            subject: "Hi".to_string(),
            html: "<p>x</p>".to_string(),
        };

        let body = serde_json::to_value(&message).unwrap();
        assert_eq!(body["from"], "Course Generator <bot@example.com>");
        assert_eq!(body["to"][0], "me@example.com");
        assert_eq!(body["subject"], "Hi");
        assert_eq!(body["html"], "<p>x</p>");
    }

    #[test]
    fn test_receipt_without_id_parses() {
        let receipt: SendReceipt = serde_json::from_str(r#"{"object": "email"}"#).unwrap();
        assert_eq!(receipt.id, None);

        let receipt: SendReceipt = serde_json::from_str(r#"{"id": "49a3999c"}"#).unwrap();
        assert_eq!(receipt.id.as_deref(), Some("49a3999c"));
    }

    #[test]
    fn test_from_config_rejects_placeholder_key() {
        let config = EmailConfig {
            api_key: "re_xxxxxxxxxxxx".to_string(),
            ..Default::default()
        };
        assert!(ResendClient::from_config(&config).is_err());
    }
}
