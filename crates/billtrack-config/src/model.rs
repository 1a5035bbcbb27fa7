use std::path::PathBuf;

use billtrack_domain::MAX_INSTANCES;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const APP_DIR: &str = "billtrack";

/// Days ahead of the reference date that still count as "due soon".
pub const DEFAULT_DUE_SOON_DAYS: u32 = 7;

/// Stores user-configurable expansion and scheduling preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Cap on instances generated per template. Never above `MAX_INSTANCES`.
    #[serde(default = "Config::default_max_instances")]
    pub max_instances: u32,
    /// How many upcoming due dates a preview lists.
    #[serde(default = "Config::default_preview_count")]
    pub preview_count: usize,
    /// Reminder lead time applied to templates that do not set their own.
    #[serde(default = "Config::default_reminder_days")]
    pub default_reminder_days: Option<u32>,
    #[serde(default = "Config::default_due_soon_days")]
    pub due_soon_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_instances: Self::default_max_instances(),
            preview_count: Self::default_preview_count(),
            default_reminder_days: Self::default_reminder_days(),
            due_soon_days: Self::default_due_soon_days(),
        }
    }
}

impl Config {
    pub fn default_max_instances() -> u32 {
        MAX_INSTANCES
    }

    pub fn default_preview_count() -> usize {
        3
    }

    pub fn default_reminder_days() -> Option<u32> {
        Some(3)
    }

    pub fn default_due_soon_days() -> u32 {
        DEFAULT_DUE_SOON_DAYS
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_instances == 0 || self.max_instances > MAX_INSTANCES {
            return Err(ConfigError::Invalid(format!(
                "max_instances must be between 1 and {}, got {}",
                MAX_INSTANCES, self.max_instances
            )));
        }
        if self.preview_count == 0 {
            return Err(ConfigError::Invalid(
                "preview_count must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Directory holding `config.json` when no explicit base directory is given.
    pub fn resolve_default_config_dir() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(APP_DIR)
    }
}
