use crate::cli::parser::InitArgs;
use crate::config::defaults::sample_settings;
use crate::config::ConfigManager;
use crate::utils::{Result, SweepError};
use dialoguer::Confirm;
use std::path::Path;

fn is_non_interactive() -> bool {
    std::env::var("SWEEP_NON_INTERACTIVE").is_ok()
        || std::env::var("CI").is_ok()
        || !atty::is(atty::Stream::Stdin)
}

/// Writes a starter settings file for the operator to edit.
pub fn execute(config_path: Option<&Path>, args: InitArgs) -> Result<()> {
    let settings_path = ConfigManager::resolve_settings_path(config_path);

    if settings_path.exists() && !args.force {
        if is_non_interactive() {
            return Err(SweepError::invalid_configuration(format!(
                "settings file already exists at {} (use --force to overwrite)",
                settings_path.display()
            )));
        }

        let overwrite = Confirm::new()
            .with_prompt(format!(
                "Settings file {} already exists. Overwrite?",
                settings_path.display()
            ))
            .default(false)
            .interact()
            .map_err(|e| {
                SweepError::invalid_configuration(format!("confirmation prompt failed: {}", e))
            })?;

        if !overwrite {
            println!("Keeping the existing settings file.");
            return Ok(());
        }
    }

    ConfigManager::save_to_path(&sample_settings(), &settings_path).map_err(|e| {
        SweepError::invalid_configuration(format!("failed to write settings file: {}", e))
    })?;

    println!("✓ Wrote starter settings to {}", settings_path.display());
    println!("  Edit the task list, then validate it with: sweep check");

    Ok(())
}
