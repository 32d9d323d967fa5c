//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::{Granularity, Reminder, Theme};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main application configuration.
///
/// Passed explicitly to every caller that needs a setting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Challenge goal in days
    #[serde(default = "default_goal_days")]
    pub goal_days: u32,

    #[serde(default)]
    pub theme: Theme,

    /// Breakdown used when no granularity is requested
    #[serde(default)]
    pub granularity: Granularity,

    /// Start a new challenge as soon as the current one is reset
    #[serde(default)]
    pub start_on_reset: bool,

    #[serde(default)]
    pub reminders_enabled: bool,

    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_goal_days() -> u32 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            goal_days: default_goal_days(),
            theme: Theme::default(),
            granularity: Granularity::default(),
            start_on_reset: false,
            reminders_enabled: false,
            reminders: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.goal_days == 0 {
            return Err(ConfigError::ValidationError(
                "Goal must be at least one day".to_string(),
            ));
        }

        if self.reminders.iter().any(|r| r.content.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "Reminder content must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Reminders that should currently fire; none when reminders are off.
    pub fn active_reminders(&self) -> &[Reminder] {
        if self.reminders_enabled {
            &self.reminders
        } else {
            &[]
        }
    }
}
