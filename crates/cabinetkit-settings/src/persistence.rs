//! Settings persistence
//!
//! Loads and saves [`EngineSettings`] as JSON or TOML, chosen by file
//! extension. Settings are validated on both load and save.

use crate::config::EngineSettings;
use crate::error::{SettingsError, SettingsResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory
pub const APP_DIR: &str = "cabinetkit";
/// File name of the default settings file
pub const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

/// Platform configuration directory for CabinetKit
pub fn config_directory() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| SettingsError::ConfigDirectory("no platform config directory".to_string()))
}

/// Default settings file location
pub fn default_settings_path() -> SettingsResult<PathBuf> {
    Ok(config_directory()?.join(SETTINGS_FILE))
}

impl EngineSettings {
    /// Load settings from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = fs::read_to_string(path)?;
        let settings: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        settings.validate()?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a `.json` or `.toml` file, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_json_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = EngineSettings::default();
        settings.material.thickness = 0.5;
        settings.clearances.insert("vent".to_string(), 4.0);

        settings.save_to_file(&path).unwrap();
        assert_eq!(EngineSettings::load_from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_toml_round_trip_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let mut settings = EngineSettings::default();
        settings.layout.allow_split = false;
        settings.clearances.insert("radiator".to_string(), 9.0);

        settings.save_to_file(&path).unwrap();
        assert_eq!(EngineSettings::load_from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_toml_takes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[sampling]\narch_curve_points = 40\n").unwrap();

        let settings = EngineSettings::load_from_file(&path).unwrap();
        assert_eq!(settings.sampling.arch_curve_points, 40);
        assert_eq!(settings.sampling.points_per_scallop, 12);
        assert_eq!(settings.material.thickness, 0.75);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"material": {"thickness": -1}}"#).unwrap();
        let err = EngineSettings::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidSetting { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        let err = EngineSettings::default().save_to_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = EngineSettings::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, EngineSettings::default());
    }
}
