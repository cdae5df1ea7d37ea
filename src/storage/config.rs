//! Analysis configuration stored as TOML in the user's data directory.

use crate::faff::{AnalysisOptions, DurationBucket, MergePolicy, DEFAULT_GAP_THRESHOLD_MS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted analysis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Application version that wrote the file
    pub version: String,
    /// Minimum silence counted as a recording gap, ms
    pub gap_threshold_ms: i64,
    /// Buckets to report, in display order
    pub selected_buckets: Vec<DurationBucket>,
    /// Merge neighbouring intervals before sorting
    pub merge_policy: MergePolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            gap_threshold_ms: DEFAULT_GAP_THRESHOLD_MS,
            selected_buckets: DurationBucket::ALL.to_vec(),
            merge_policy: MergePolicy::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn to_options(&self) -> AnalysisOptions {
        AnalysisOptions::new(self.selected_buckets.clone(), self.gap_threshold_ms)
            .with_merge_policy(self.merge_policy)
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "ridefaff", "RideFaff")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from the default location.
pub fn load_config() -> Result<AnalysisConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from `path`, using defaults when it does not exist.
pub fn load_config_from(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AnalysisConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save configuration to the default location.
pub fn save_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to `path`, creating parent directories.
pub fn save_config_to(config: &AnalysisConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
