use crate::config::api_keys::apply_env_overrides;
use crate::config::constants::CONFIG_FILE_NAME;
use crate::config::core::{ContentConfig, EmailConfig, GroqConfig, OutputConfig};
use crate::config::env::{EnvLookup, process_env, substitute_env};
use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONTENT_SECTION: &str = "content";
const CURRENT_MASTER_PROMPT: &str = "current_master_prompt";

/// Fully resolved `config.yaml`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CourseConfig {
    /// Text-generation provider settings
    pub groq: GroqConfig,

    /// Email delivery settings
    pub email: EmailConfig,

    /// Prompt templates and the stored master prompt
    pub content: ContentConfig,

    /// Output file location and naming
    pub output: OutputConfig,
}

impl CourseConfig {
    /// Resolve a parsed document: expand `${NAME}` placeholders, deserialize,
    /// then apply environment overrides.
    ///
    /// `content.current_master_prompt` is model output and is taken
    /// literally; placeholders inside it are never expanded.
    pub fn resolve(
        mut document: Value,
        source: &Path,
        lookup: EnvLookup<'_>,
    ) -> Result<Self, ConfigError> {
        let stored_prompt = take_master_prompt(&mut document);
        let mut expanded = substitute_env(document, lookup)?;
        if let Some(prompt) = stored_prompt {
            restore_master_prompt(&mut expanded, prompt);
        }
        let mut config: CourseConfig =
            serde_yaml::from_value(expanded).map_err(|error| ConfigError::Parse {
                path: source.to_path_buf(),
                error,
            })?;
        apply_env_overrides(&mut config, lookup);
        Ok(config)
    }
}

/// Loads `config.yaml` and persists the master prompt back into it
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: CourseConfig,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Load `config.yaml` from the current directory
    pub fn load() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        Self::load_from_workspace(cwd)
    }

    /// Load `config.yaml` from a specific directory
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_from_file(workspace.as_ref().join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a specific file using the process environment
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_from_file_with_env(path, &process_env)
    }

    /// Load configuration from a specific file with a custom variable lookup
    pub fn load_from_file_with_env(
        path: impl AsRef<Path>,
        lookup: EnvLookup<'_>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let document = read_document(path)?;
        let config = CourseConfig::resolve(document, path, lookup)?;
        debug!(path = %path.display(), model = %config.groq.model, "configuration loaded");

        Ok(Self {
            config,
            config_path: path.to_path_buf(),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &CourseConfig {
        &self.config
    }

    pub fn into_config(self) -> CourseConfig {
        self.config
    }

    /// Path the configuration was read from and is saved back to
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Store `prompt` as `content.current_master_prompt`.
    ///
    /// The raw document is re-read so unexpanded `${NAME}` placeholders are
    /// written back as they were. All other values are kept; YAML comments
    /// are not. There is no locking: the last writer wins.
    pub fn save_master_prompt(&mut self, prompt: &str) -> Result<(), ConfigError> {
        let path = self.config_path.clone();
        let mut document = read_document(&path)?;

        let root = document
            .as_mapping_mut()
            .ok_or_else(|| ConfigError::Invalid {
                field: "<root>",
                reason: "expected a mapping".to_string(),
            })?;

        if root.get(CONTENT_SECTION).is_none_or(Value::is_null) {
            root.insert(
                Value::String(CONTENT_SECTION.to_string()),
                Value::Mapping(Mapping::new()),
            );
        }

        let content = root
            .get_mut(CONTENT_SECTION)
            .and_then(Value::as_mapping_mut)
            .ok_or_else(|| ConfigError::Invalid {
                field: "content",
                reason: "expected a mapping".to_string(),
            })?;
        content.insert(
            Value::String(CURRENT_MASTER_PROMPT.to_string()),
            Value::String(prompt.to_string()),
        );

        let serialized = serde_yaml::to_string(&document).map_err(|source| {
            ConfigError::Serialize {
                path: path.clone(),
                source,
            }
        })?;
        fs::write(&path, serialized).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        self.config.content.current_master_prompt = Some(prompt.to_string());
        info!(path = %path.display(), chars = prompt.chars().count(), "master prompt saved");
        Ok(())
    }
}

fn take_master_prompt(document: &mut Value) -> Option<Value> {
    document
        .get_mut(CONTENT_SECTION)
        .and_then(Value::as_mapping_mut)
        .and_then(|content| content.remove(CURRENT_MASTER_PROMPT))
}

fn restore_master_prompt(document: &mut Value, prompt: Value) {
    if let Some(content) = document
        .get_mut(CONTENT_SECTION)
        .and_then(Value::as_mapping_mut)
    {
        content.insert(Value::String(CURRENT_MASTER_PROMPT.to_string()), prompt);
    }
}

fn read_document(path: &Path) -> Result<Value, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_yaml::from_str(&content).map_err(|error| ConfigError::Parse {
        path: path.to_path_buf(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
groq:
  api_key: gsk_file
email:
  api_key: re_file
  from_email: from@example.com
  recipient_email: to@example.com
content:
  master_subject_prompt: "Write a course plan about {subject}"
output:
  directory: out
"#;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_fill_optional_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, MINIMAL).unwrap();

        let manager = ConfigManager::load_from_file_with_env(&path, &no_env).unwrap();
        let config = manager.config();

        assert_eq!(config.groq.model, "llama-3.3-70b-versatile");
        assert_eq!(config.email.sender_name, "Course Generator");
        assert_eq!(config.output.directory, "out");
        assert_eq!(config.output.filename_pattern, "course_{date}.html");
        assert_eq!(config.content.current_master_prompt, None);
        assert_eq!(manager.config_path(), path.as_path());
    }

    #[test]
    fn test_missing_section_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "groq:\n  api_key: x\n").unwrap();

        let err = ConfigManager::load_from_file_with_env(&path, &no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "groq: [unclosed\n").unwrap();

        let err = ConfigManager::load_from_file_with_env(&path, &no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_stored_prompt_is_not_expanded() {
        let mut document: Value = serde_yaml::from_str(MINIMAL).unwrap();
        document["content"]
            .as_mapping_mut()
            .unwrap()
            .insert("current_master_prompt".into(), "Use ${HOME} and ${name}".into());

        let config = CourseConfig::resolve(document, Path::new("config.yaml"), &no_env).unwrap();
        assert_eq!(
            config.content.current_master_prompt.as_deref(),
            Some("Use ${HOME} and ${name}")
        );
    }

    #[test]
    fn test_save_creates_content_section_when_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "content: null\n").unwrap();

        let mut manager = ConfigManager {
            config: CourseConfig {
                groq: GroqConfig::default(),
                email: EmailConfig::default(),
                content: ContentConfig::default(),
                output: OutputConfig::default(),
            },
            config_path: path.clone(),
        };
        manager.save_master_prompt("hello").unwrap();

        let raw: Value = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["content"]["current_master_prompt"], Value::from("hello"));
    }
}
