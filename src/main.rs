//! tzx binary entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tzx::cli::{Cli, Commands, ConfigCommands};
use tzx::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Summary { dir } => {
            let config = Config::load(cli.config.as_deref())?;
            commands::summary::handle(dir, &config)
        }
        Commands::Dump {
            dir,
            kind,
            name,
            sorted,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            commands::dump::handle(dir, kind, name.as_deref(), sorted, &config)
        }
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(cli.config.as_deref()),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over the verbosity flags.
fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tzx={default_level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
