//! Environment overrides for credentials and addresses, plus `.env` loading.
//!
//! A fixed set of variables takes precedence over the values written in
//! `config.yaml` whenever they are set to something non-empty.

use crate::config::constants::env_vars;
use crate::config::env::EnvLookup;
use crate::config::loader::CourseConfig;
use tracing::{debug, warn};

/// Load environment variables from a `.env` file if one exists.
///
/// A missing file is fine; an unreadable one is logged and ignored.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded environment from .env"),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(error = %e, "failed to load .env file"),
    }
}

/// Apply `GROQ_API_KEY`, `RESEND_API_KEY`, `SENDER_EMAIL` and
/// `RECIPIENT_EMAIL` on top of the file values.
pub fn apply_env_overrides(config: &mut CourseConfig, lookup: EnvLookup<'_>) {
    let overrides: [(&str, &mut String); 4] = [
        (env_vars::GROQ_API_KEY, &mut config.groq.api_key),
        (env_vars::RESEND_API_KEY, &mut config.email.api_key),
        (env_vars::SENDER_EMAIL, &mut config.email.from_email),
        (env_vars::RECIPIENT_EMAIL, &mut config.email.recipient_email),
    ];

    for (name, field) in overrides {
        if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
            debug!(variable = name, "configuration value overridden from environment");
            *field = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::core::{ContentConfig, EmailConfig, GroqConfig, OutputConfig};

    fn sample_config() -> CourseConfig {
        CourseConfig {
            groq: GroqConfig {
                api_key: "file-groq".to_string(),
                ..Default::default()
            },
            email: EmailConfig {
                api_key: "file-resend".to_string(),
                from_email: "file@from.test".to_string(),
                recipient_email: "file@to.test".to_string(),
                ..Default::default()
            },
            content: ContentConfig::default(),
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_env_values_take_precedence() {
        let mut config = sample_config();
        let lookup = |name: &str| match name {
            "GROQ_API_KEY" => Some("env-groq".to_string()),
            "RECIPIENT_EMAIL" => Some("env@to.test".to_string()),
            _ => None,
        };

        apply_env_overrides(&mut config, &lookup);

        assert_eq!(config.groq.api_key, "env-groq");
        assert_eq!(config.email.recipient_email, "env@to.test");
        assert_eq!(config.email.api_key, "file-resend");
        assert_eq!(config.email.from_email, "file@from.test");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = sample_config();
        let lookup = |_: &str| Some(String::new());

        apply_env_overrides(&mut config, &lookup);

        assert_eq!(config, sample_config());
    }

    #[test]
    fn test_all_overrides_applied() {
        let mut config = sample_config();
        let lookup = |name: &str| Some(format!("env:{name}"));

        apply_env_overrides(&mut config, &lookup);

        assert_eq!(config.groq.api_key, "env:GROQ_API_KEY");
        assert_eq!(config.email.api_key, "env:RESEND_API_KEY");
        assert_eq!(config.email.from_email, "env:SENDER_EMAIL");
        assert_eq!(config.email.recipient_email, "env:RECIPIENT_EMAIL");
    }
}
