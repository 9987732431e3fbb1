//! Default mode: generate a course from the stored master prompt, save it, email it

use super::CommandError;
use crate::config::CourseConfig;
use crate::email::{EmailSender, Notifier};
use crate::generator::CourseGenerator;
use crate::llm::LLMProvider;
use crate::output::CourseWriter;
use chrono::NaiveDateTime;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct CourseReport {
    /// Where the course was written
    pub path: PathBuf,
    /// Delivery message from the notifier
    pub email_message: String,
    pub message_id: Option<String>,
}

/// Run the full pipeline. Each step only starts when the previous one
/// succeeded; a delivery failure still leaves the saved file in place.
pub async fn generate_course(
    config: &CourseConfig,
    provider: &dyn LLMProvider,
    sender: &dyn EmailSender,
    now: NaiveDateTime,
) -> Result<CourseReport, CommandError> {
    config.email.require_api_key()?;
    config.email.require_addresses()?;
    config.groq.require_api_key()?;
    let master_prompt = config.content.require_master_prompt()?;

    let content = CourseGenerator::new(&config.groq, provider)
        .generate_course_content(master_prompt)
        .await?;

    let path = CourseWriter::from_config(&config.output).write(&content, now)?;

    let outcome = Notifier::new(&config.email, sender)
        .send_course_email(&content, now.date())
        .await;

    if !outcome.success {
        warn!(path = %path.display(), "course saved but not delivered");
        return Err(CommandError::Email(outcome.message));
    }

    Ok(CourseReport {
        path,
        email_message: outcome.message,
        message_id: outcome.message_id,
    })
}
