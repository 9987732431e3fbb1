use anyhow::{Context, Result};
use chrono::Local;
use console::style;
use coursegen_core::commands::generate_course;
use coursegen_core::config::ConfigManager;
use coursegen_core::email::ResendClient;
use coursegen_core::llm::GroqProvider;
use std::path::Path;

/// Default mode: generate today's course, save it and email it
pub async fn handle_course_command(config_path: &Path) -> Result<()> {
    let config = ConfigManager::load_from_file(config_path)
        .context("Failed to load configuration")?
        .into_config();
    let sender = ResendClient::from_config(&config.email).context("Email is not configured")?;
    let provider =
        GroqProvider::from_config(&config.groq).context("Groq provider is not configured")?;

    println!("{}", style("Generating course").blue().bold());
    println!("Model: {}", config.groq.model);

    let report = generate_course(&config, &provider, &sender, Local::now().naive_local())
        .await
        .context("Course generation failed")?;

    println!(
        "{} {}",
        style("Course saved to").green(),
        report.path.display()
    );
    println!("{}", style(&report.email_message).green());
    Ok(())
}
