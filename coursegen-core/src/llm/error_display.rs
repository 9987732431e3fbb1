//! Styled rendering of provider errors for terminal output

use console::style;

/// Get a styled error message
pub fn style_llm_error(message: &str) -> String {
    style(message).red().to_string()
}

/// Get a styled provider name
pub fn style_provider_name(provider: &str) -> String {
    match provider.to_lowercase().as_str() {
        "groq" => style(provider).magenta().bold().to_string(),
        _ => style(provider).cyan().to_string(),
    }
}

/// Format an LLM error for display
pub fn format_llm_error(provider: &str, error: &str) -> String {
    format!("{} {}", style_provider_name(provider), style_llm_error(error))
}
