use anyhow::{Context, Result};
use chrono::Local;
use console::style;
use coursegen_core::commands::send_test_email;
use coursegen_core::config::ConfigManager;
use coursegen_core::email::ResendClient;
use std::path::Path;

/// Handle `--test-email`
pub async fn handle_test_email_command(config_path: &Path) -> Result<()> {
    let config = ConfigManager::load_from_file(config_path)
        .context("Failed to load configuration")?
        .into_config();
    let sender = ResendClient::from_config(&config.email).context("Email is not configured")?;

    println!("{}", style("Sending test email").blue().bold());
    println!("From: {}", config.email.from_email);
    println!("To: {}", style(&config.email.recipient_email).cyan());

    let outcome = send_test_email(&config, &sender, Local::now().date_naive())
        .await
        .context("Test email was not delivered")?;

    println!("{}", style(&outcome.message).green());
    if let Some(id) = &outcome.message_id {
        println!("Message id: {}", style(id).dim());
    }
    Ok(())
}
