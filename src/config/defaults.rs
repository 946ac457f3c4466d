use super::{Settings, TaskConfig};

pub fn get_default_config_dir() -> std::path::PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "sweep") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        std::env::var_os("HOME")
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(".config")
            .join("sweep")
    }
}

pub fn get_settings_file_path() -> std::path::PathBuf {
    // Allow environment variable override for settings path (used in tests)
    if let Ok(settings_path) = std::env::var("SWEEP_CONFIG_PATH") {
        return std::path::PathBuf::from(settings_path);
    }

    get_default_config_dir().join("settings.json")
}

/// Lock file guarding against overlapping scheduled runs.
pub fn get_lock_file_path() -> std::path::PathBuf {
    std::env::temp_dir().join("sweep.lock")
}

/// Starter settings written by `sweep init`.
pub fn sample_settings() -> Settings {
    Settings {
        tasks: vec![TaskConfig {
            source_path: "/var/log/myapp".to_string(),
            destination_path: Some("/var/log/myapp/archive".to_string()),
            delete_days_ago: Some(30),
            move_days_ago: Some(7),
        }],
        loop_delay_minutes: Some(60),
    }
}
