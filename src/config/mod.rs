use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod manager;
pub mod validation;

pub use manager::ConfigManager;

/// Process-wide settings: the cleaning tasks to run plus an optional
/// loop delay. Mirrors the on-disk JSON settings file.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Settings {
    pub tasks: Vec<TaskConfig>,
    pub loop_delay_minutes: Option<u64>,
}

/// One cleaning task: a source tree, an optional destination for moves,
/// and the age thresholds driving deletion and relocation.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TaskConfig {
    pub source_path: String,
    pub destination_path: Option<String>,
    pub delete_days_ago: Option<u32>,
    pub move_days_ago: Option<u32>,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Json(error)
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        validation::validate_settings(self)
    }

    pub fn runs_forever(&self) -> bool {
        self.loop_delay_minutes.is_some()
    }
}

impl TaskConfig {
    /// Destination path, with a blank entry treated the same as an
    /// absent one.
    pub fn destination(&self) -> Option<&str> {
        self.destination_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
    }

    pub fn has_destination(&self) -> bool {
        self.destination().is_some()
    }
}
