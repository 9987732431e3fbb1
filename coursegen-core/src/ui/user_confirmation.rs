//! User confirmation before writing to `config.yaml`

use console::style;
use dialoguer::Confirm;
use std::path::Path;

/// Interactive yes/no prompts
pub struct UserConfirmation;

impl UserConfirmation {
    /// Ask whether a freshly generated master prompt should replace the stored one
    pub fn confirm_save_master_prompt(config_path: &Path) -> Result<bool, dialoguer::Error> {
        println!();
        println!(
            "Saving writes {} and replaces any existing master prompt.",
            style(config_path.display()).cyan()
        );

        let confirmed = Self::confirm_action("Save this master prompt?", false)?;

        if confirmed {
            println!("{}", style("Master prompt will be saved").green());
        } else {
            println!("{}", style("Cancelled: master prompt not saved").yellow());
        }

        Ok(confirmed)
    }

    /// Simple yes/no confirmation
    pub fn confirm_action(message: &str, default: bool) -> Result<bool, dialoguer::Error> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
    }
}
