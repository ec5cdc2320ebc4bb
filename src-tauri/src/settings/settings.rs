// Settings management and persistence
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::logging::LoggingSettings;

/// Main application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub version: i32, // Settings schema version for future migrations
    pub database_file: String,
    pub logging: LoggingSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: 1,
            database_file: "bouquet_shop.db".to_string(),
            logging: LoggingSettings::default(),
        }
    }
}

impl AppSettings {
    /// Get the settings file path
    pub fn get_settings_path(app_dir: &Path) -> PathBuf {
        app_dir.join("settings.json")
    }

    /// Load settings from file, or return defaults if file doesn't exist
    pub fn load(app_dir: &Path) -> Result<Self> {
        let path = Self::get_settings_path(app_dir);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;

        let settings: AppSettings = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to file
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        fs::create_dir_all(app_dir)
            .with_context(|| format!("failed to create settings directory {}", app_dir.display()))?;

        let path = Self::get_settings_path(app_dir);
        let content = serde_json::to_string_pretty(self)?;

        fs::write(&path, content)
            .with_context(|| format!("failed to write settings file {}", path.display()))?;

        tracing::info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Where the bouquet database lives; relative names resolve against `app_dir`
    pub fn database_path(&self, app_dir: &Path) -> PathBuf {
        let file = Path::new(&self.database_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            app_dir.join(file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load(dir.path()).unwrap();

        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.database_path(dir.path()), dir.path().join("bouquet_shop.db"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = AppSettings::default();
        settings.database_file = "stock.db".to_string();
        settings.logging.format = "json".to_string();

        settings.save(dir.path()).unwrap();

        assert_eq!(AppSettings::load(dir.path()).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            AppSettings::get_settings_path(dir.path()),
            r#"{ "logging": { "level": "debug" } }"#,
        )
        .unwrap();

        let settings = AppSettings::load(dir.path()).unwrap();
        assert_eq!(settings.database_file, "bouquet_shop.db");
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, "pretty");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(AppSettings::get_settings_path(dir.path()), "{ not json").unwrap();

        let err = AppSettings::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse settings file"));
    }

    #[test]
    fn test_absolute_database_file_kept() {
        let dir = tempfile::tempdir().unwrap();
        let elsewhere = dir.path().join("shared").join("shop.db");
        let settings = AppSettings {
            database_file: elsewhere.to_string_lossy().into_owned(),
            ..AppSettings::default()
        };

        assert_eq!(settings.database_path(Path::new("/unused")), elsewhere);
    }
}
