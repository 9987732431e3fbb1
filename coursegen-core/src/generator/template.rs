//! `{name}` placeholder rendering for prompt and filename templates.
//!
//! `{{` and `}}` produce literal braces. Placeholders with no matching
//! variable are copied through unchanged, and substituted values are never
//! re-scanned.

/// Render `template`, replacing each `{key}` with its value from `variables`
pub fn render_template(template: &str, variables: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        output.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            output.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            output.push('}');
            rest = &tail[2..];
        } else if tail.starts_with('{') {
            match tail[1..].find('}') {
                Some(end) => {
                    let key = &tail[1..end + 1];
                    match variables.iter().find(|(name, _)| *name == key) {
                        Some((_, value)) => output.push_str(value),
                        None => output.push_str(&tail[..end + 2]),
                    }
                    rest = &tail[end + 2..];
                }
                None => {
                    output.push_str(tail);
                    rest = "";
                }
            }
        } else {
            output.push('}');
            rest = &tail[1..];
        }
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_known_placeholder() {
        let out = render_template(
            "Create a master prompt for {subject}.",
            &[("subject", "TOGAF")],
        );
        assert_eq!(out, "Create a master prompt for TOGAF.");
    }

    #[test]
    fn test_escaped_braces_become_literal() {
        let out = render_template("Use {{json}} for {subject}", &[("subject", "APIs")]);
        assert_eq!(out, "Use {json} for APIs");
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        let out = render_template("{topic} and {subject}", &[("subject", "Rust")]);
        assert_eq!(out, "{topic} and Rust");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let out = render_template("{subject}", &[("subject", "{subject}")]);
        assert_eq!(out, "{subject}");
    }

    #[test]
    fn test_unbalanced_braces_pass_through() {
        assert_eq!(render_template("open { only", &[]), "open { only");
        assert_eq!(render_template("close } only", &[]), "close } only");
    }

    #[test]
    fn test_multibyte_text_around_placeholder() {
        let out = render_template("Kurs über {subject} – Teil 1", &[("subject", "Ökologie")]);
        assert_eq!(out, "Kurs über Ökologie – Teil 1");
    }
}
