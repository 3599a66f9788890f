//! Shell completion generation

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use tzx::cli::Cli;

#[cfg(not(tarpaulin_include))]
pub fn handle(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tzx", &mut std::io::stdout());
}
