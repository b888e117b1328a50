//! Configuration file support for gateway-sizer.
//!
//! Provides YAML-based engine configuration through
//! `gateway-sizer.config.yml` files, including data structures, file loading,
//! and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::{Result, SizingError};
use crate::sizing::domain::RetentionBand;
use crate::sizing::policies::{MatchPolicy, StorageProfile, DEFAULT_POTENTIAL_THRESHOLD};

const CONFIG_FILENAME: &str = "gateway-sizer.config.yml";

/// Retention used when neither the config file nor the request sets one
pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct EngineConfig {
    pub retention_days: Option<u32>,
    pub exclude_sensitive_columns: Option<bool>,
    pub storage: Option<StorageProfile>,
    pub potential_threshold: Option<u8>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl EngineConfig {
    pub fn retention_days(&self) -> u32 {
        self.retention_days.unwrap_or(DEFAULT_RETENTION_DAYS)
    }

    pub fn exclude_sensitive_columns(&self) -> bool {
        self.exclude_sensitive_columns.unwrap_or(true)
    }

    pub fn storage_profile(&self) -> StorageProfile {
        self.storage.unwrap_or_default()
    }

    pub fn match_policy(&self) -> Result<MatchPolicy> {
        MatchPolicy::new(self.potential_threshold.unwrap_or(DEFAULT_POTENTIAL_THRESHOLD))
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<EngineConfig> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: EngineConfig = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<EngineConfig>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
pub fn validate_config(config: &EngineConfig) -> Result<()> {
    if let Some(days) = config.retention_days {
        RetentionBand::from_days(days).map_err(|_| SizingError::ConfigError {
            details: format!(
                "retention_days must be between 1 and {}, got {}",
                RetentionBand::MAX_DAYS,
                days
            ),
        })?;
    }
    config.match_policy()?;
    if let Some(ref storage) = config.storage {
        storage.validate()?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &EngineConfig) {
    for key in config.unknown_fields.keys() {
        log::warn!("Unknown config field '{}' will be ignored.", key);
    }
}
