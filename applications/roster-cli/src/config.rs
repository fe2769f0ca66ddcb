//! Front end configuration

use roster_client::{ClientConfig, DEFAULT_COLLECTION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_collection")]
    pub collection: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl RosterConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `roster.toml` is used when
    /// present. Environment variables prefixed with `ROSTER_` override the
    /// file, with `__` between section and key (`ROSTER_API__BASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Load(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url must be set".to_string()));
        }

        if self.api.collection.trim_matches('/').trim().is_empty() {
            return Err(ConfigError::Invalid(
                "api.collection must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Client settings for the configured collection
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.base_url.clone()).with_collection(self.api.collection.clone())
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_log_filter() -> String {
    "roster=info".to_string()
}
