//! Configuration management for recstat.
//!
//! Only display concerns live here: the refresh period and the glyphs shown
//! for each status. The name of the process being watched is a compile-time
//! constant, not configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::APP_NAME;
use crate::status::Glyphs;

/// Configuration for the recstat binary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Seconds between widget refreshes
    #[serde(
        default = "default_interval",
        skip_serializing_if = "is_default_interval"
    )]
    pub interval: f32,

    /// Text shown while a recording is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_glyph: Option<String>,

    /// Text shown while no recording is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_glyph: Option<String>,

    /// Text shown when the recording state cannot be determined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown_glyph: Option<String>,
}

fn default_interval() -> f32 {
    1.0
}

fn is_default_interval(v: &f32) -> bool {
    (*v - 1.0).abs() < f32::EPSILON
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            recording_glyph: None,
            idle_glyph: None,
            unknown_glyph: None,
        }
    }
}

impl Config {
    /// Get the refresh interval as a Duration. Non-positive values fall
    /// back to the default.
    pub fn interval(&self) -> Duration {
        if self.interval <= 0.0 {
            warn!(
                interval = self.interval,
                "refresh interval must be positive, using default"
            );
            return Duration::from_secs_f32(default_interval());
        }
        Duration::from_secs_f32(self.interval)
    }

    /// Get the glyph table with config overrides applied.
    pub fn glyphs(&self) -> Glyphs {
        Glyphs::new(
            self.recording_glyph.clone(),
            self.idle_glyph.clone(),
            self.unknown_glyph.clone(),
        )
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new ConfigManager with the default configuration directory.
    pub fn new() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Ok(Self { config_path })
    }

    /// Creates a new ConfigManager with a specified configuration directory.
    #[cfg(test)]
    pub fn with_config_dir<P: AsRef<std::path::Path>>(dir: P) -> Self {
        let config_path = dir.as_ref().join(format!("{}.toml", APP_NAME));
        Self { config_path }
    }

    /// Returns the default path to the configuration file.
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = config_dir().context("Failed to retrieve configuration directory")?;
        Ok(config_dir.join(APP_NAME).join(format!("{}.toml", APP_NAME)))
    }

    /// Loads the configuration from the config file or returns default.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let config_content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file at {:?}", self.config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file at {:?}", self.config_path))?;

        Ok(config)
    }

    /// Saves the configuration to the config file.
    pub fn save(&self, config: &Config) -> Result<()> {
        let config_dir = self
            .config_path
            .parent()
            .with_context(|| format!("Failed to get parent directory of {:?}", self.config_path))?;

        fs::create_dir_all(config_dir)
            .with_context(|| format!("Failed to create config directory at {:?}", config_dir))?;

        let serialized =
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?;

        fs::write(&self.config_path, serialized)
            .with_context(|| format!("Failed to write config file at {:?}", self.config_path))?;

        Ok(())
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &std::path::Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use crate::status::Status;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!((config.interval - 1.0).abs() < f32::EPSILON);
        assert!(config.recording_glyph.is_none());
        assert!(config.idle_glyph.is_none());
        assert!(config.unknown_glyph.is_none());
        assert_eq!(config.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            interval: 2.5,
            recording_glyph: Some("REC".to_string()),
            ..Default::default()
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert!((config.interval - deserialized.interval).abs() < f32::EPSILON);
        assert_eq!(config.recording_glyph, deserialized.recording_glyph);
    }

    #[test]
    fn test_nonpositive_interval_falls_back() {
        let config = Config {
            interval: -3.0,
            ..Default::default()
        };
        assert_eq!(config.interval(), Duration::from_secs(1));

        let config = Config {
            interval: 0.0,
            ..Default::default()
        };
        assert_eq!(config.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_glyph_overrides() {
        let config = Config {
            idle_glyph: Some("zzz".to_string()),
            ..Default::default()
        };

        let glyphs = config.glyphs();
        assert_eq!(glyphs.for_status(Status::Idle), "zzz");
        assert_eq!(glyphs.for_status(Status::Recording), "🔴REC");
    }

    #[test]
    fn test_config_manager_save_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let manager = ConfigManager::with_config_dir(temp_dir.path());

        let config = Config {
            unknown_glyph: Some("?!".to_string()),
            ..Default::default()
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(config.unknown_glyph, loaded.unknown_glyph);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = tempfile::tempdir().unwrap();

        let manager = ConfigManager::with_config_dir(temp_dir.path());
        let loaded = manager.load().unwrap();

        assert!((loaded.interval - 1.0).abs() < f32::EPSILON);
    }
}
