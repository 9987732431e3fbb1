//! Outbound email delivery
//!
//! [`EmailSender`] is the transport seam (Resend in production);
//! [`Notifier`] builds the message from configuration and turns every
//! failure into a [`NotifyOutcome`] instead of an error.

pub mod notifier;
pub mod resend;
pub mod subject;
pub mod templates;

pub use notifier::{Notifier, NotifyOutcome};
pub use resend::ResendClient;
pub use subject::{build_subject, extract_topic, truncate_topic};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One HTML email ready for a transport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// What the provider returned for an accepted send
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SendReceipt {
    /// Provider-assigned message id; absent means the message was not created
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Transport name used in log lines
    fn name(&self) -> &str;

    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, EmailError>;
}
