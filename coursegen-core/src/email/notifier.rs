use super::subject::build_subject;
use super::{EmailMessage, EmailSender};
use crate::config::EmailConfig;
use chrono::NaiveDate;
use tracing::{info, warn};

/// Result of a delivery attempt; `message` is meant for the user
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyOutcome {
    pub success: bool,
    pub message: String,
    pub message_id: Option<String>,
}

impl NotifyOutcome {
    fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
            message_id: None,
        }
    }
}

/// Sends generated HTML to the configured recipient
pub struct Notifier<'a> {
    config: &'a EmailConfig,
    sender: &'a dyn EmailSender,
}

impl<'a> Notifier<'a> {
    pub fn new(config: &'a EmailConfig, sender: &'a dyn EmailSender) -> Self {
        Self { config, sender }
    }

    /// Build the outgoing message for `html`
    pub fn compose(
        &self,
        html: &str,
        today: NaiveDate,
    ) -> Result<EmailMessage, crate::config::ConfigError> {
        let (_, recipient) = self.config.require_addresses()?;
        Ok(EmailMessage {
            from: self.config.sender_mailbox()?,
            to: vec![recipient.to_string()],
            subject: build_subject(self.config, html, today),
            html: html.to_string(),
        })
    }

    /// Send `html` by email. Never fails: every problem is reported
    /// through the returned outcome.
    pub async fn send_course_email(&self, html: &str, today: NaiveDate) -> NotifyOutcome {
        let message = match self.compose(html, today) {
            Ok(message) => message,
            Err(err) => return NotifyOutcome::failed(format!("Error sending email: {err}")),
        };

        match self.sender.send(&message).await {
            Ok(receipt) => match receipt.id.filter(|id| !id.trim().is_empty()) {
                Some(id) => {
                    info!(transport = self.sender.name(), %id, subject = %message.subject, "email sent");
                    NotifyOutcome {
                        success: true,
                        message: "Email sent successfully!".to_string(),
                        message_id: Some(id),
                    }
                }
                None => {
                    warn!(transport = self.sender.name(), "provider returned no message id");
                    NotifyOutcome::failed(
                        "Error sending email: provider did not return a message id".to_string(),
                    )
                }
            },
            Err(err) => {
                warn!(transport = self.sender.name(), error = %err, "email delivery failed");
                NotifyOutcome::failed(format!("Error sending email: {err}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::{EmailError, SendReceipt};
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum Reply {
        Id(&'static str),
        NoId,
        Fail,
    }

    struct FakeSender {
        reply: Reply,
        sent: Mutex<Vec<EmailMessage>>,
    }

    impl FakeSender {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EmailSender for FakeSender {
        fn name(&self) -> &str {
            "fake"
        }

        async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, EmailError> {
            self.sent.lock().unwrap().push(message.clone());
            match self.reply {
                Reply::Id(id) => Ok(SendReceipt {
                    id: Some(id.to_string()),
                }),
                Reply::NoId => Ok(SendReceipt::default()),
                Reply::Fail => Err(EmailError::Network("connection refused".to_string())),
            }
        }
    }

    fn email_config() -> EmailConfig {
        EmailConfig {
            api_key: "re_live".to_string(),
            from_email: "bot@example.com".to_string(),
            recipient_email: "me@example.com".to_string(),
            subject_prefix: "Course".to_string(),
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[tokio::test]
    async fn test_success_requires_message_id() {
        let config = email_config();
        let sender = FakeSender::new(Reply::Id("msg_1"));
        let outcome = Notifier::new(&config, &sender)
            .send_course_email("<h1>Topic</h1>", today())
            .await;

        assert!(outcome.success);
        assert_eq!(outcome.message_id.as_deref(), Some("msg_1"));

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent[0].from, "Course Generator <bot@example.com>");
        assert_eq!(sent[0].to, vec!["me@example.com".to_string()]);
        assert_eq!(sent[0].subject, "Course: Topic");
        assert_eq!(sent[0].html, "<h1>Topic</h1>");
    }

    #[tokio::test]
    async fn test_missing_message_id_is_failure() {
        let config = email_config();
        let sender = FakeSender::new(Reply::NoId);
        let outcome = Notifier::new(&config, &sender)
            .send_course_email("<p>body</p>", today())
            .await;

        assert!(!outcome.success);
        assert!(outcome.message.contains("message id"));
    }

    #[tokio::test]
    async fn test_transport_error_becomes_failed_outcome() {
        let config = email_config();
        let sender = FakeSender::new(Reply::Fail);
        let outcome = Notifier::new(&config, &sender)
            .send_course_email("<p>body</p>", today())
            .await;

        assert!(!outcome.success);
        assert!(outcome.message.starts_with("Error sending email:"));
        assert!(outcome.message.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_missing_recipient_is_reported_without_sending() {
        let config = EmailConfig {
            recipient_email: String::new(),
            ..email_config()
        };
        let sender = FakeSender::new(Reply::Id("unused"));
        let outcome = Notifier::new(&config, &sender)
            .send_course_email("<p>body</p>", today())
            .await;

        assert!(!outcome.success);
        assert!(outcome.message.contains("email.recipient_email"));
        assert!(sender.sent.lock().unwrap().is_empty());
    }
}
