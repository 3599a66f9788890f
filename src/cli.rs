//! Command-line interface definitions.
//!
//! Kept in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("TZX_BUILD_DATE"),
    ")"
);

/// TZ database extractor - decode IANA zone files into typed records
#[derive(Parser, Debug)]
#[command(name = "tzx", version, long_version = LONG_VERSION)]
#[command(long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a tz database directory and print the extractor summary
    #[command(long_about = "Parse a tz database directory and print the extractor summary.

Reports line and name counts for Rule, Zone and Link records plus the
ignored and invalid line counters. Exits with status 0 even when lines
fail to decode; only I/O errors are fatal.

Example:
  tzx summary /usr/share/zoneinfo/tzdata")]
    Summary {
        /// Directory holding the zone files (defaults to database.input_dir)
        dir: Option<PathBuf>,
    },

    /// Print decoded records as JSON
    Dump {
        /// Directory holding the zone files (defaults to database.input_dir)
        dir: Option<PathBuf>,

        /// Which map to print
        #[arg(long, value_enum, default_value_t = DumpKind::All)]
        kind: DumpKind,

        /// Print only the entry with this name
        #[arg(long)]
        name: Option<String>,

        /// Order policy rules by (from year, month, day)
        #[arg(long)]
        sorted: bool,
    },

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the default config file location
    Path,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumpKind {
    All,
    Zones,
    Policies,
    Links,
}
