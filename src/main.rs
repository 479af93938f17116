//! mortality-relay CLI
//!
//! Usage: mortality-relay [OPTIONS] <COMMAND>
//!
//! Commands:
//!   transfer       Find export files and add each one to the queue
//!   status         Show the queue status
//!   process        Process everything in the queue
//!   full           Transfer, then status, then process
//!   jurisdictions  List the built-in jurisdiction table

mod commands;
mod ui;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mortality_relay::presentation::{Cli, ColorWhen};

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        println!();
        return ExitCode::SUCCESS;
    };

    match commands::dispatch(command, &cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            if cli.json {
                let _ = ui::json::emit(serde_json::json!({
                    "event": "error",
                    "message": format!("{:#}", err),
                }));
            } else {
                let caps = ui::terminal::detect_capabilities();
                let color = match cli.color {
                    Some(ColorWhen::Always) => true,
                    Some(ColorWhen::Never) => false,
                    Some(ColorWhen::Auto) | None => caps.supports_color,
                };
                eprintln!(
                    "{}",
                    ui::error::format_error(&err, color, caps.supports_unicode)
                );
            }
            ExitCode::FAILURE
        }
    }
}
