use crate::config::{ConfigManager, TaskConfig};
use crate::utils::{Result, SweepError};
use std::path::Path;

/// Loads and validates the settings file, then prints what a run would
/// do. Touches nothing on disk.
pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let settings_path = ConfigManager::resolve_settings_path(config_path);

    let settings = ConfigManager::load_from_file(&settings_path).map_err(|e| {
        SweepError::invalid_configuration(format!(
            "{} (settings file: {})",
            e,
            settings_path.display()
        ))
    })?;

    println!("✓ Settings valid: {}", settings_path.display());
    println!("  {} cleaning task(s) configured\n", settings.tasks.len());

    for (index, task) in settings.tasks.iter().enumerate() {
        println!("Task {}: {}", index + 1, describe_task(task));
    }

    match settings.loop_delay_minutes {
        Some(minutes) => println!("\nRepeats every {} minute(s).", minutes),
        None => println!("\nRuns once."),
    }

    Ok(())
}

fn describe_task(task: &TaskConfig) -> String {
    let delete_clause = match task.delete_days_ago {
        Some(days) => format!("delete files older than {} day(s)", days),
        None => "delete all files".to_string(),
    };

    match task.destination() {
        Some(destination) => format!(
            "{} -> {}: move files older than {} day(s), then {} at the destination",
            task.source_path,
            destination,
            task.move_days_ago.unwrap_or(0),
            delete_clause
        ),
        None => format!("{}: {}", task.source_path, delete_clause),
    }
}
