//! Send the fixed test message to check email settings

use super::CommandError;
use crate::config::CourseConfig;
use crate::email::templates::test_email_html;
use crate::email::{EmailSender, Notifier, NotifyOutcome};
use chrono::NaiveDate;

pub async fn send_test_email(
    config: &CourseConfig,
    sender: &dyn EmailSender,
    today: NaiveDate,
) -> Result<NotifyOutcome, CommandError> {
    config.email.require_api_key()?;
    let html = test_email_html(&config.email)?;

    let outcome = Notifier::new(&config.email, sender)
        .send_course_email(&html, today)
        .await;

    if outcome.success {
        Ok(outcome)
    } else {
        Err(CommandError::Email(outcome.message))
    }
}
