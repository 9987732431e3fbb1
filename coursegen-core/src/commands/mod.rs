//! Command implementations for the three run modes

pub mod course;
pub mod generate_prompt;
pub mod test_email;

pub use course::{CourseReport, generate_course};
pub use generate_prompt::{PromptOutcome, generate_master_prompt};
pub use test_email::send_test_email;

use crate::config::ConfigError;
use crate::generator::GenerationError;
use crate::output::OutputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("{0}")]
    Email(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Confirmation prompt failed: {0}")]
    Confirmation(String),
}

impl CommandError {
    /// Follow-up suggestion for errors the user can fix directly
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CommandError::Config(err) => err.hint(),
            _ => None,
        }
    }
}
