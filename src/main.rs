//! coursegen - generate a course with an LLM and deliver it by email

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Mode};
use console::style;
use coursegen_core::commands::CommandError;
use coursegen_core::config::{ConfigError, load_dotenv};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing();
    apply_color_choice(args.color.color);
    load_dotenv();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Cli) -> Result<()> {
    match args.mode() {
        Mode::GeneratePrompt(subject) => {
            cli::handle_generate_prompt_command(&args.config, subject, args.yes).await
        }
        Mode::TestEmail => cli::handle_test_email_command(&args.config).await,
        Mode::Course => cli::handle_course_command(&args.config).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn apply_color_choice(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        }
        ColorChoice::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
        ColorChoice::Auto => {}
    }
}

fn report_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", style("Error:").red().bold());

    let hint = err.chain().find_map(|cause| {
        cause
            .downcast_ref::<CommandError>()
            .and_then(CommandError::hint)
            .or_else(|| cause.downcast_ref::<ConfigError>().and_then(ConfigError::hint))
    });
    if let Some(hint) = hint {
        eprintln!("{} {hint}", style("Hint:").yellow());
    }
}
