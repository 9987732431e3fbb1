use anyhow::{Context, Result};
use console::style;
use coursegen_core::commands::{CommandError, PromptOutcome, generate_master_prompt};
use coursegen_core::config::ConfigManager;
use coursegen_core::llm::GroqProvider;
use coursegen_core::ui::{UserConfirmation, render_markdown};
use std::path::Path;

/// Handle `--generate-prompt`: generate, preview, confirm, save
pub async fn handle_generate_prompt_command(
    config_path: &Path,
    subject: &str,
    assume_yes: bool,
) -> Result<()> {
    let mut manager =
        ConfigManager::load_from_file(config_path).context("Failed to load configuration")?;
    let provider = GroqProvider::from_config(&manager.config().groq)
        .context("Groq provider is not configured")?;

    println!("{}", style("Master Prompt Generation").blue().bold());
    println!("Subject: {}", style(subject.trim()).cyan());
    println!("Model: {}", manager.config().groq.model);
    println!();

    let target = manager.config_path().to_path_buf();
    let outcome = generate_master_prompt(&mut manager, &provider, subject, |prompt| {
        println!("{}", style("Generated master prompt").green().bold());
        println!("{}", render_markdown(prompt));

        if assume_yes {
            return Ok(true);
        }
        UserConfirmation::confirm_save_master_prompt(&target)
            .map_err(|err| CommandError::Confirmation(err.to_string()))
    })
    .await
    .context("Master prompt generation failed")?;

    match outcome {
        PromptOutcome::Saved(_) => println!(
            "{} {}",
            style("Master prompt saved to").green(),
            target.display()
        ),
        PromptOutcome::Discarded(_) => {
            println!("{}", style("Master prompt was not saved.").yellow())
        }
    }

    Ok(())
}
