//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use tzx::config::CONFIG_ENV;
use tzx::theme::current_theme;
use tzx::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(explicit: Option<&Path>) -> Result<()> {
    let config = Config::load(explicit)?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print where the config file is looked up.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;
    let status = if path.exists() { "" } else { " (not created)" };
    println!("{}{}", theme.primary_text(&path.display().to_string()), theme.secondary_text(status));

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        println!(
            "{}",
            theme.secondary_text(&format!(
                "Overridden by {}={}",
                CONFIG_ENV,
                Path::new(&env_path).display()
            ))
        );
    }
    Ok(())
}
