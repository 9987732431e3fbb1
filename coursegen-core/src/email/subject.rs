//! Email subject construction from the generated HTML

use crate::config::EmailConfig;
use crate::config::constants::defaults::{DEFAULT_TOPIC, MAX_TOPIC_LENGTH};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

const ELLIPSIS: &str = "...";

static HEADING_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>([^<]+)</h1>").ok());

/// Text of the first `<h1>` element, or the generic topic label
pub fn extract_topic(html: &str) -> String {
    HEADING_PATTERN
        .as_ref()
        .and_then(|re| re.captures(html))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|topic| !topic.is_empty())
        .unwrap_or(DEFAULT_TOPIC)
        .to_string()
}

/// Keep at most `max` characters, appending `...` when anything was cut
pub fn truncate_topic(topic: &str, max: usize) -> String {
    match topic.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &topic[..cut]),
        None => topic.to_string(),
    }
}

/// `"{prefix}: {topic}"` when a prefix is configured, otherwise a date-stamped subject
pub fn build_subject(config: &EmailConfig, html: &str, today: NaiveDate) -> String {
    let prefix = config.subject_prefix.trim();
    if prefix.is_empty() {
        format!("Your AI-Generated Course - {}", today.format("%Y-%m-%d"))
    } else {
        let topic = truncate_topic(&extract_topic(html), MAX_TOPIC_LENGTH);
        format!("{prefix}: {topic}")
    }
}
