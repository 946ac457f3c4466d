use super::defaults::get_settings_file_path;
use super::{Result, Settings};
use std::fs;
use std::io::Write;
use std::path::Path;

pub struct ConfigManager;

impl ConfigManager {
    pub fn resolve_settings_path(override_path: Option<&Path>) -> std::path::PathBuf {
        match override_path {
            Some(path) => path.to_path_buf(),
            None => get_settings_file_path(),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
        settings.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        let mut file = fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        Ok(())
    }
}
