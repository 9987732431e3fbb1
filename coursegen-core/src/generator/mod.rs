//! Course text generation on top of an [`LLMProvider`]
//!
//! Both operations send the configured system instruction plus one user
//! message. A failed call or a blank reply is reported as an error; no
//! fallback document is produced, so callers abort the rest of the run.

pub mod template;

pub use template::render_template;

use crate::config::GroqConfig;
use crate::llm::{FinishReason, LLMError, LLMProvider, LLMRequest};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Error generating master subject prompt")]
    MasterPrompt(#[source] LLMError),

    #[error("Error generating course content")]
    CourseContent(#[source] LLMError),
}

/// Issues the two completion calls used by the tool
pub struct CourseGenerator<'a> {
    config: &'a GroqConfig,
    provider: &'a dyn LLMProvider,
}

impl<'a> CourseGenerator<'a> {
    pub fn new(config: &'a GroqConfig, provider: &'a dyn LLMProvider) -> Self {
        Self { config, provider }
    }

    /// Ask for a reusable master prompt about `subject`.
    ///
    /// `template` is the `content.master_subject_prompt` value; its
    /// `{subject}` placeholder is filled in before sending.
    pub async fn generate_master_prompt(
        &self,
        subject: &str,
        template: &str,
    ) -> Result<String, GenerationError> {
        let user_message = render_template(template, &[("subject", subject)]);
        let prompt = self
            .complete(user_message)
            .await
            .map_err(GenerationError::MasterPrompt)?;
        info!(subject, chars = prompt.chars().count(), "master prompt generated");
        Ok(prompt)
    }

    /// Generate a course document from the stored master prompt
    pub async fn generate_course_content(
        &self,
        master_prompt: &str,
    ) -> Result<String, GenerationError> {
        let content = self
            .complete(master_prompt.to_string())
            .await
            .map_err(GenerationError::CourseContent)?;
        info!(chars = content.chars().count(), "course content generated");
        Ok(content)
    }

    async fn complete(&self, user_message: String) -> Result<String, LLMError> {
        let mut request =
            LLMRequest::single_turn(&self.config.model, &self.config.system_prompt, user_message);
        request.temperature = self.config.temperature;
        request.max_tokens = self.config.max_tokens;

        let response = self.provider.generate(request).await?;
        if response.finish_reason == FinishReason::Length {
            warn!(provider = self.provider.name(), "reply was cut off at the token limit");
        }

        match response.content {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(LLMError::EmptyResponse),
        }
    }
}
