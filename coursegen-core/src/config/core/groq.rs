use crate::config::constants::{defaults, models, placeholders, urls};
use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Groq chat-completion settings (`groq` section)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GroqConfig {
    /// API key; `GROQ_API_KEY` overrides it
    #[serde(default)]
    pub api_key: String,

    /// Model used for both master-prompt and course generation
    #[serde(default = "default_model")]
    pub model: String,

    /// System instruction sent ahead of every user message
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// OpenAI-compatible endpoint root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn default_model() -> String {
    models::groq::DEFAULT_MODEL.to_string()
}
fn default_system_prompt() -> String {
    defaults::DEFAULT_SYSTEM_PROMPT.to_string()
}
fn default_base_url() -> String {
    urls::GROQ_API_BASE.to_string()
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            base_url: default_base_url(),
            temperature: None,
            max_tokens: None,
        }
    }
}

impl GroqConfig {
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        super::require_value(
            &self.api_key,
            "groq.api_key",
            Some(placeholders::GROQ_API_KEY),
        )
    }

    pub fn require_model(&self) -> Result<&str, ConfigError> {
        super::require_value(&self.model, "groq.model", None)
    }
}
