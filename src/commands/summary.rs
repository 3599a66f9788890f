//! Summary command handler

use std::path::PathBuf;

use anyhow::Result;

use tzx::theme::current_theme;
use tzx::Config;

use super::load_database;

/// Parse the database and print the extractor summary.
#[cfg(not(tarpaulin_include))]
pub fn handle(dir: Option<PathBuf>, config: &Config) -> Result<()> {
    let db = load_database(dir, config)?;
    let summary = db.summary();
    summary.log();

    let theme = current_theme();
    println!("{}", theme.heading_text("Extractor Summary"));
    for line in summary.to_string().lines() {
        println!("{}", theme.primary_text(line));
    }

    if summary.has_failures() {
        println!(
            "{}",
            theme.warning_text("Some lines failed to decode; run with -v for details.")
        );
    } else {
        println!("{}", theme.success_text("All lines decoded."));
    }

    Ok(())
}
