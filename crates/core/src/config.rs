//! Configuration file parsing for .unitgate.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-project configuration file
pub const CONFIG_FILENAME: &str = ".unitgate.toml";

/// Environment variable overriding `backend.url`
pub const BACKEND_URL_ENV: &str = "UNITGATE_BACKEND_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Main configuration structure for .unitgate.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitgateConfig {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub entitlement: EntitlementConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the conversion/authorization service
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementConfig {
    /// Refresh the token once it is this close to expiring
    #[serde(default = "default_refresh_threshold")]
    pub refresh_threshold_secs: i64,

    /// Where entitlement state is persisted (default: user config dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_refresh_threshold() -> i64 {
    3600
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for EntitlementConfig {
    fn default() -> Self {
        Self {
            refresh_threshold_secs: default_refresh_threshold(),
            store_path: None,
        }
    }
}

impl UnitgateConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: UnitgateConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Find and load .unitgate.toml from the given directory or its ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self, ConfigError> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILENAME);
            if config_path.exists() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Ok(Self::default())
    }

    /// Apply `UNITGATE_BACKEND_URL` if set and non-empty
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            self.override_backend(&url);
        }
    }

    /// Replace the backend URL unless `url` is blank
    pub fn override_backend(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.backend.url = url.to_string();
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
