//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod dump;
pub mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};

use tzx::{Config, Extractor, TzDatabase};

/// Parse the database in `dir`, falling back to `database.input_dir`.
pub fn load_database(dir: Option<PathBuf>, config: &Config) -> Result<TzDatabase> {
    let dir = dir
        .or_else(|| config.database.input_dir.clone())
        .context("No tz database directory given (pass DIR or set database.input_dir)")?;

    Extractor::new()
        .parse(&dir, &config.database.zone_files)
        .with_context(|| format!("Failed to parse tz database in {}", dir.display()))
}
