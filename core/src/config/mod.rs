//! Configuration management for the MoodFlow core
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: MOODFLOW__)

use crate::platform::{Importance, NotificationChannel};
use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use moodflow_shared::DEFAULT_WATER_GOAL_ML;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub water: WaterConfig,
    #[serde(default)]
    pub reminders: ReminderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory
    pub data_dir: Option<PathBuf>,
}

/// Water tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterConfig {
    /// Goal used until the user sets one
    pub default_goal_ml: i32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            default_goal_ml: DEFAULT_WATER_GOAL_ML,
        }
    }
}

/// Hydration reminder notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    pub channel_id: String,
    pub channel_name: String,
    pub title: String,
    pub body: String,
    pub vibration_pattern_ms: Vec<u64>,
    pub sound: Option<String>,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            channel_id: "water_reminders".to_string(),
            channel_name: "Water Reminders".to_string(),
            title: "Hydration reminder".to_string(),
            body: "Take a sip now. Your body will thank you. Log it in MoodFlow!".to_string(),
            vibration_pattern_ms: vec![0, 400, 200, 400],
            sound: None,
        }
    }
}

impl ReminderConfig {
    /// High-importance channel carrying the configured sound and vibration
    pub fn channel(&self) -> NotificationChannel {
        NotificationChannel {
            id: self.channel_id.clone(),
            name: self.channel_name.clone(),
            importance: Importance::High,
            vibration_pattern_ms: self.vibration_pattern_ms.clone(),
            sound: self.sound.clone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "moodflow_core=debug".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with MOODFLOW__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., MOODFLOW__WATER__DEFAULT_GOAL_ML=2500 sets water.default_goal_ml
            .add_source(config::Environment::with_prefix("MOODFLOW").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Load configuration from an explicit file on top of the defaults
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::from(path.as_ref()).required(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Directory the file store writes to
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage.data_dir {
            return Ok(dir.clone());
        }

        ProjectDirs::from("com", "example", "moodflow")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| anyhow!("No home directory available for application data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.water.default_goal_ml, 2000);
        assert_eq!(config.reminders.channel_id, "water_reminders");
        assert_eq!(config.reminders.vibration_pattern_ms, vec![0, 400, 200, 400]);
        assert_eq!(config.logging.filter, "moodflow_core=debug");
        assert!(!config.logging.json);
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[water]\ndefault_goal_ml = 2500\n\n[reminders]\nsound = \"droplet\"\n\n[storage]\ndata_dir = \"/tmp/moodflow-test\""
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.water.default_goal_ml, 2500);
        assert_eq!(config.reminders.sound.as_deref(), Some("droplet"));
        assert_eq!(config.reminders.title, "Hydration reminder");
        assert_eq!(
            config.data_dir().unwrap(),
            PathBuf::from("/tmp/moodflow-test")
        );
    }

    #[test]
    fn test_channel_from_reminder_config() {
        let channel = ReminderConfig::default().channel();
        assert_eq!(channel.name, "Water Reminders");
        assert_eq!(channel.importance, Importance::High);
        assert!(channel.sound.is_none());
    }
}
