use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving or persisting `config.yaml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to access config file: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {error}", .path.display())]
    Parse {
        path: PathBuf,
        error: serde_yaml::Error,
    },

    #[error("Failed to serialize config file: {}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Missing required configuration value: {field}")]
    MissingValue { field: &'static str },

    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    /// Follow-up suggestion for errors the user can fix directly
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ConfigError::NotFound(_) => {
                Some("Run coursegen from the directory that contains config.yaml, or pass --config")
            }
            ConfigError::MissingEnvVar(_) => {
                Some("Export the variable or add it to a .env file next to config.yaml")
            }
            ConfigError::MissingValue {
                field: "content.current_master_prompt",
            } => Some("Generate one first with: coursegen --generate-prompt \"<subject>\""),
            ConfigError::MissingValue {
                field: "groq.api_key",
            } => Some("Set groq.api_key in config.yaml or export GROQ_API_KEY"),
            ConfigError::MissingValue {
                field: "email.api_key",
            } => Some("Set email.api_key in config.yaml or export RESEND_API_KEY"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_master_prompt_hint_mentions_flag() {
        let err = ConfigError::MissingValue {
            field: "content.current_master_prompt",
        };
        assert!(err.hint().is_some_and(|h| h.contains("--generate-prompt")));
        assert!(ConfigError::MissingValue { field: "output.directory" }.hint().is_none());
    }
}
