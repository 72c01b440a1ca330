use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::CountdownSettings;

const SETTINGS_FILE: &str = "countdown.toml";

/// Loads and stores [`CountdownSettings`] as TOML.
pub struct SettingsService;

impl SettingsService {
    /// Platform config location, or the current directory when none resolves.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "DaysCountdown", "DaysCountdown") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    /// Read settings without validating them, falling back to defaults when
    /// the file does not exist. Callers that merge overrides validate after.
    pub fn read(path: &Path) -> Result<CountdownSettings> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(CountdownSettings::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", path.display()))
    }

    /// Read and validate settings.
    pub fn load(path: &Path) -> Result<CountdownSettings> {
        let settings = Self::read(path)?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

        Ok(settings)
    }

    pub fn save(path: &Path, settings: &CountdownSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings)?;
        fs::write(path, data)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = SettingsService::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, CountdownSettings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("countdown.toml");
        let settings = CountdownSettings {
            deadline: "2024-12-25".to_string(),
            timezone: "Europe/Paris".to_string(),
            target: "xmas".to_string(),
            page: Some(PathBuf::from("www/index.html")),
        };

        SettingsService::save(&path, &settings).unwrap();
        let loaded = SettingsService::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("countdown.toml");
        fs::write(&path, "deadline = \"soon\"\n").unwrap();

        let err = SettingsService::load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }

    #[test]
    fn test_read_skips_validation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("countdown.toml");
        fs::write(&path, "deadline = \"soon\"\n").unwrap();

        let settings = SettingsService::read(&path).unwrap();
        assert_eq!(settings.deadline, "soon");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("countdown.toml");
        let settings = CountdownSettings {
            target: String::new(),
            ..Default::default()
        };

        assert!(SettingsService::save(&path, &settings).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_default_path_names_settings_file() {
        assert!(SettingsService::default_path().ends_with(SETTINGS_FILE));
    }
}
