//! Configuration management for tzx.
//!
//! Looked up in order: an explicit `--config` path, `$TZX_CONFIG`, then
//! `<config dir>/tzx/config.toml`. A missing default file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::estimator::BufferExceptions;
use crate::tzdb::DEFAULT_ZONE_FILES;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "TZX_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub estimator: EstimatorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Directory holding the zone files, used when no directory is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<PathBuf>,
    /// Zone files to read, in order.
    pub zone_files: Vec<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            input_dir: None,
            zone_files: DEFAULT_ZONE_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub start_year: i32,
    /// Exclusive.
    pub until_year: i32,
    /// Zone name to extra buffer slots.
    pub exceptions: BufferExceptions,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            start_year: 2000,
            until_year: 2050,
            exceptions: BufferExceptions::default(),
        }
    }
}

impl Config {
    /// Load from the first config location that applies.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }

        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from a specific file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Default config file location.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("tzx").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.estimator.start_year >= self.estimator.until_year {
            anyhow::bail!(
                "estimator.start_year ({}) must be before estimator.until_year ({})",
                self.estimator.start_year,
                self.estimator.until_year
            );
        }
        if self.database.zone_files.is_empty() {
            anyhow::bail!("database.zone_files must name at least one file");
        }
        Ok(())
    }
}
