//! Command handlers
//!
//! Each handler returns `Ok(true)` when everything it ran succeeded and
//! `Ok(false)` when some file or queue command failed.

mod jurisdictions;
mod run;

use anyhow::{Context, Result};

use mortality_relay::config::{Config, LoadedConfig};
use mortality_relay::presentation::{Cli, Commands};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

pub use jurisdictions::cmd_jurisdictions;
pub use run::cmd_run;

/// Config file, environment and CLI flags, layered
fn load_config(cli: &Cli) -> Result<Config> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let LoadedConfig {
        config,
        path,
        warnings,
    } = Config::load_or_default(cli.config.as_deref(), &cwd).context("failed to load config")?;

    if let Some(path) = &path {
        tracing::info!(path = %path.display(), "using config file");
        if !warnings.is_empty() && !cli.json {
            let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
            print_config_warnings(path, &warnings, &ui);
        }
    }

    Ok(config.with_cli_overrides(&cli.overrides()))
}

pub fn dispatch(command: Commands, cli: &Cli) -> Result<bool> {
    let config = load_config(cli)?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    match command.action() {
        Some(action) => cmd_run(action, &config, &ui),
        None => cmd_jurisdictions(&ui),
    }
}
