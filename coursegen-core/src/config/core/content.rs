use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Prompt material (`content` section)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Template for the master-prompt request; `{subject}` is replaced
    #[serde(default)]
    pub master_subject_prompt: String,

    /// Last master prompt the user chose to keep
    #[serde(default)]
    pub current_master_prompt: Option<String>,
}

impl ContentConfig {
    pub fn require_subject_template(&self) -> Result<&str, ConfigError> {
        super::require_value(
            &self.master_subject_prompt,
            "content.master_subject_prompt",
            None,
        )
    }

    pub fn require_master_prompt(&self) -> Result<&str, ConfigError> {
        let prompt = self.current_master_prompt.as_deref().unwrap_or_default();
        super::require_value(prompt, "content.current_master_prompt", None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_master_prompt_names_the_field() {
        let content = ContentConfig::default();
        let err = content.require_master_prompt().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required configuration value: content.current_master_prompt"
        );
    }

    #[test]
    fn blank_master_prompt_is_rejected() {
        let content = ContentConfig {
            current_master_prompt: Some("   \n".to_string()),
            ..Default::default()
        };
        assert!(content.require_master_prompt().is_err());
    }
}
