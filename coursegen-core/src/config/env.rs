//! `${NAME}` placeholder expansion over a parsed configuration document.
//!
//! The walk is independent of file I/O: callers hand in the document tree
//! and a lookup function, which keeps it testable without touching the
//! process environment.

use crate::config::error::ConfigError;
use serde_yaml::value::TaggedValue;
use serde_yaml::{Mapping, Value};

/// Resolves an environment variable name to its value
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Lookup backed by the real process environment
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Replace every `${NAME}` in every string of `value`, recursing through
/// mappings, sequences and tagged values. Keys and non-string scalars are
/// left alone.
pub fn substitute_env(value: Value, lookup: EnvLookup<'_>) -> Result<Value, ConfigError> {
    match value {
        Value::String(text) => expand_placeholders(&text, lookup).map(Value::String),
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| substitute_env(item, lookup))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence),
        Value::Mapping(entries) => {
            let mut resolved = Mapping::with_capacity(entries.len());
            for (key, entry) in entries {
                resolved.insert(key, substitute_env(entry, lookup)?);
            }
            Ok(Value::Mapping(resolved))
        }
        Value::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            Ok(Value::Tagged(Box::new(TaggedValue {
                tag,
                value: substitute_env(value, lookup)?,
            })))
        }
        scalar => Ok(scalar),
    }
}

/// Expand the placeholders of a single string.
///
/// Substituted text is not scanned again. Sequences that are not a
/// well-formed placeholder (`${` with no closing brace, or an invalid name)
/// are copied through unchanged.
pub fn expand_placeholders(input: &str, lookup: EnvLookup<'_>) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find('}') {
            Some(end) if is_variable_name(&after[..end]) => {
                let name = &after[..end];
                let value =
                    lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))?;
                output.push_str(&value);
                rest = &after[end + 1..];
            }
            _ => {
                output.push_str("${");
                rest = after;
            }
        }
    }

    output.push_str(rest);
    Ok(output)
}

fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
