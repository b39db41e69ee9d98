use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::version::registries::npm::DEFAULT_BASE_URL;

// =============================================================================
// Time-related constants
// =============================================================================

/// Default cache refresh interval in milliseconds (24 hours)
pub const DEFAULT_REFRESH_INTERVAL_MS: i64 = 24 * 60 * 60 * 1000;

/// Minimum spacing between consecutive registry lookups (325ms)
pub const DEFAULT_MIN_INTERVAL_MS: u64 = 325;

/// Environment variable holding the tracing filter
pub const LOG_ENV: &str = "MANIFEST_DATE_LOG";

const APP_DIR: &str = "manifest-date";

/// Application configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub cache: CacheConfig,
    pub registry: RegistryConfig,
}

/// Cache-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfig {
    pub enabled: bool,
    /// Cache refresh interval in milliseconds
    pub refresh_interval: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            refresh_interval: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

/// Registry access configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    pub base_url: String,
    /// Minimum spacing between lookups in milliseconds
    pub min_interval: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            min_interval: DEFAULT_MIN_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    /// Load configuration from `path`, or from the default location when None
    ///
    /// A missing file at the default location yields the defaults; an explicitly
    /// given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (config_path(), false),
        };

        if !required && !path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::InvalidJson { path, source })
    }
}

/// Returns the path to the data directory for manifest-date.
/// Uses $XDG_DATA_HOME/manifest-date if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/manifest-date,
/// or ./manifest-date if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the history cache database.
pub fn db_path() -> PathBuf {
    data_dir().join("history.db")
}

/// Returns the default config file path.
pub fn config_path() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
        .join("config.json")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(APP_DIR)
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join(APP_DIR)
}
