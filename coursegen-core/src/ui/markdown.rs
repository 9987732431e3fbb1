//! Markdown rendering for generated prompts

use termimad::{MadSkin, rgb};

/// Skin used for prompt previews
pub fn markdown_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(rgb(255, 187, 0));
    skin.bold.set_fg(rgb(255, 255, 255));
    skin.italic.set_fg(rgb(180, 180, 255));
    skin.inline_code.set_fg(rgb(120, 220, 160));
    skin
}

/// Render `text` as Markdown for the terminal, wrapped to the current width
pub fn render_markdown(text: &str) -> String {
    markdown_skin().term_text(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_keeps_text() {
        let rendered = render_markdown("# Course Plan\n\nCover **Rust** basics.");
        assert!(rendered.contains("Course Plan"));
        assert!(rendered.contains("Rust"));
    }
}
