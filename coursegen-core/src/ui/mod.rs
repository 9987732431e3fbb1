//! Terminal interaction: confirmations and Markdown previews

pub mod markdown;
pub mod user_confirmation;

pub use markdown::{markdown_skin, render_markdown};
pub use user_confirmation::UserConfirmation;
