//! Generate a master prompt and, once approved, store it in `config.yaml`

use super::CommandError;
use crate::config::ConfigManager;
use crate::generator::CourseGenerator;
use crate::llm::LLMProvider;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub enum PromptOutcome {
    /// Written to `content.current_master_prompt`
    Saved(String),
    /// Shown to the user but not kept
    Discarded(String),
}

/// Generate a master prompt for `subject` and persist it when `approve`
/// returns `true`.
pub async fn generate_master_prompt<F>(
    manager: &mut ConfigManager,
    provider: &dyn LLMProvider,
    subject: &str,
    approve: F,
) -> Result<PromptOutcome, CommandError>
where
    F: FnOnce(&str) -> Result<bool, CommandError>,
{
    let subject = subject.trim();
    if subject.is_empty() {
        return Err(CommandError::InvalidInput(
            "subject must not be empty".to_string(),
        ));
    }

    let config = manager.config();
    config.groq.require_api_key()?;
    let template = config.content.require_subject_template()?;

    let prompt = CourseGenerator::new(&config.groq, provider)
        .generate_master_prompt(subject, template)
        .await?;

    if approve(&prompt)? {
        manager.save_master_prompt(&prompt)?;
        Ok(PromptOutcome::Saved(prompt))
    } else {
        info!(subject, "master prompt discarded");
        Ok(PromptOutcome::Discarded(prompt))
    }
}
