//! Configuration for armature systems.
//!
//! Supports YAML file and environment variable overrides, plus the shared
//! runtime [`Settings`] store seeded from configuration.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tokio::sync::RwLock;

/// Errors from configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// System configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notification configuration.
    pub notification: NotificationConfig,
    /// Initial contents of the shared settings store.
    pub settings: HashMap<String, String>,
}

/// Notification configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Channel tag resolved by the notifier factory ("EMAIL" or "SMS").
    pub channel: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            channel: crate::notify::EMAIL_CHANNEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file (`ARMATURE_CONFIG`, default `armature.yaml`)
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("ARMATURE_CONFIG").unwrap_or_else(|_| "armature.yaml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(channel) = std::env::var("ARMATURE_NOTIFY_CHANNEL") {
            self.notification.channel = channel;
        }
    }
}

/// Shared runtime key/value settings.
///
/// Exactly one store exists per composed system: the composition root owns
/// it and hands the same `Arc<Settings>` to every component that needs it,
/// so all handles observe the same mutations. No expiry, no namespacing.
#[derive(Debug, Default)]
pub struct Settings {
    values: RwLock<HashMap<String, String>>,
}

impl Settings {
    /// Create an empty settings store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the configured values.
    pub fn from_config(config: &Config) -> Self {
        Self {
            values: RwLock::new(config.settings.clone()),
        }
    }

    /// Set `key` to `value`, overwriting any previous value.
    pub async fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().await.insert(key.into(), value.into());
    }

    /// Fetch the value for `key`.
    pub async fn get(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }

    /// Fetch the value for `key`, or `default` if unset.
    pub async fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).await.unwrap_or_else(|| default.to_string())
    }
}
