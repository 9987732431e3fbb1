pub mod content;
pub mod email;
pub mod groq;
pub mod output;

pub use content::ContentConfig;
pub use email::EmailConfig;
pub use groq::GroqConfig;
pub use output::OutputConfig;

use crate::config::error::ConfigError;

/// Return `value` when it holds something usable for `field`.
///
/// Blank strings and the sample-config placeholder both count as unset.
pub(crate) fn require_value<'a>(
    value: &'a str,
    field: &'static str,
    placeholder: Option<&str>,
) -> Result<&'a str, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || placeholder.is_some_and(|p| trimmed == p) {
        return Err(ConfigError::MissingValue { field });
    }
    Ok(trimmed)
}
