//! CLI argument parsing

use clap::{ColorChoice, Parser, ValueHint};
use colorchoice_clap::Color as ColorSelection;
use coursegen_core::config::constants::CONFIG_FILE_NAME;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "coursegen",
    version,
    about = "Generate course content with an LLM and deliver it by email\n\nModes:\n  coursegen --generate-prompt \"TOGAF\"   create and save a master prompt\n  coursegen --test-email               check email settings\n  coursegen                            generate, save and email a course",
    color = ColorChoice::Auto
)]
pub struct Cli {
    /// Color output selection (auto, always, never)
    #[command(flatten)]
    pub color: ColorSelection,

    /// Configuration file to read and update
    #[arg(
        long,
        value_name = "PATH",
        default_value = CONFIG_FILE_NAME,
        value_hint = ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Generate a new master prompt for SUBJECT and offer to save it
    #[arg(long, value_name = "SUBJECT", conflicts_with = "test_email")]
    pub generate_prompt: Option<String>,

    /// Send a test email using the current email settings
    #[arg(long)]
    pub test_email: bool,

    /// Save the generated master prompt without asking
    #[arg(short = 'y', long, requires = "generate_prompt")]
    pub yes: bool,
}

/// Which pipeline a run executes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    GeneratePrompt(&'a str),
    TestEmail,
    Course,
}

impl Cli {
    pub fn mode(&self) -> Mode<'_> {
        match (&self.generate_prompt, self.test_email) {
            (Some(subject), _) => Mode::GeneratePrompt(subject),
            (None, true) => Mode::TestEmail,
            (None, false) => Mode::Course,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_mode_runs_course_pipeline() {
        let cli = Cli::try_parse_from(["coursegen"]).unwrap();
        assert_eq!(cli.mode(), Mode::Course);
        assert_eq!(cli.config, PathBuf::from("config.yaml"));
        assert!(!cli.yes);
    }

    #[test]
    fn generate_prompt_takes_subject() {
        let cli = Cli::try_parse_from(["coursegen", "--generate-prompt", "TOGAF", "--yes"]).unwrap();
        assert_eq!(cli.mode(), Mode::GeneratePrompt("TOGAF"));
        assert!(cli.yes);
    }

    #[test]
    fn modes_are_mutually_exclusive() {
        let err = Cli::try_parse_from(["coursegen", "--generate-prompt", "TOGAF", "--test-email"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn yes_requires_generate_prompt() {
        assert!(Cli::try_parse_from(["coursegen", "--yes"]).is_err());
    }
}
