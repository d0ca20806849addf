//! Configuration for the acquisition pipeline
//!
//! Settings are grouped into nested sections mirroring the pipeline stages:
//! acquisition cadence, validity filtering, persistence target, and
//! logging. The on-disk format is TOML; every key is optional and falls
//! back to its default, so a partial file configures only what it names.
//!
//! # Example
//!
//! ```toml
//! [acquisition]
//! poll_interval_ms = 200
//!
//! [filter]
//! accepted_statuses = [5, 9]
//!
//! [storage]
//! csv_path = "tof_log.csv"
//! ```

use crate::error::{Result, TofLogError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default wait between acquisition attempts in milliseconds (5 Hz)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 200;

/// Status codes treated as a valid target detection by default
pub const DEFAULT_ACCEPTED_STATUSES: [u8; 2] = [5, 9];

/// Default persistence target for zone records
pub const DEFAULT_CSV_PATH: &str = "tof_log.csv";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Acquisition cadence settings
    #[serde(default)]
    pub acquisition: AcquisitionConfig,

    /// Zone validity filter settings
    #[serde(default)]
    pub filter: FilterConfig,

    /// Persistence settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Diagnostics settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TofLogError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        toml::from_str(&content).map_err(|e| {
            TofLogError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }

    /// Load configuration, returning defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| TofLogError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            TofLogError::Config(format!("Failed to write config file {:?}: {}", path, e))
        })
    }
}

/// Acquisition cadence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionConfig {
    /// Wait between the start of successive acquisition attempts, in
    /// milliseconds. The wait precedes each attempt.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl AcquisitionConfig {
    /// The poll interval as a [`Duration`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

/// Zone validity filter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Status codes accepted for persistence. Codes 5 and 9 are the
    /// sensor's "valid target detected" classifications.
    #[serde(default = "default_accepted_statuses")]
    pub accepted_statuses: Vec<u8>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            accepted_statuses: DEFAULT_ACCEPTED_STATUSES.to_vec(),
        }
    }
}

/// Persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the CSV record store
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
        }
    }
}

/// Diagnostics settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Directory for daily-rolled log files; console-only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_accepted_statuses() -> Vec<u8> {
    DEFAULT_ACCEPTED_STATUSES.to_vec()
}

fn default_csv_path() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.acquisition.poll_interval_ms, 200);
        assert_eq!(config.filter.accepted_statuses, vec![5, 9]);
        assert_eq!(config.storage.csv_path, PathBuf::from("tof_log.csv"));
        assert!(config.logging.log_dir.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [acquisition]
            poll_interval_ms = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.acquisition.poll_interval_ms, 50);
        assert_eq!(config.filter.accepted_statuses, vec![5, 9]);
        assert_eq!(config.storage.csv_path, PathBuf::from("tof_log.csv"));
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.acquisition.poll_interval(), Duration::from_millis(200));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toflog.toml");

        let mut config = AppConfig::default();
        config.acquisition.poll_interval_ms = 125;
        config.filter.accepted_statuses = vec![5];
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.acquisition.poll_interval_ms, 125);
        assert_eq!(loaded.filter.accepted_statuses, vec![5]);
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = AppConfig::load("/nonexistent/toflog.toml").unwrap_err();
        assert!(matches!(err, TofLogError::Config(_)));
    }
}
