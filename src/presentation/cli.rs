//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--root, --queue-dir, --json, --color, --verbose, ...) are inherited by all subcommands
//! - Running without a subcommand prints usage and does nothing else

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CliOverrides;
use crate::domain::value_objects::QueueAction;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// mortality-relay - hand scraped mortality exports to the ingestion queue
#[derive(Parser, Debug)]
#[command(name = "mortality-relay")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Typical run: 'mortality-relay full --root ./processed_csvs --queue-dir ../ctbal'"
)]
pub struct Cli {
    /// Directory to scan for export files (repeatable)
    #[arg(long = "root", value_name = "DIR", global = true)]
    pub roots: Vec<PathBuf>,

    /// File name glob to match inside each root (repeatable)
    #[arg(long = "pattern", value_name = "GLOB", global = true)]
    pub patterns: Vec<String>,

    /// Working directory of the queue tool
    #[arg(long, value_name = "DIR", global = true)]
    pub queue_dir: Option<PathBuf>,

    /// Seconds before an enqueue command is killed
    #[arg(long, value_name = "SECS", global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Seconds before the status or process command is killed
    #[arg(long, value_name = "SECS", global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub process_timeout: Option<u64>,

    /// Config file (default: ./mortality-relay.toml, then the user config dir)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Find export files and add each one to the queue
    Transfer,

    /// Show the queue status
    Status,

    /// Process everything in the queue
    Process,

    /// Transfer, then status, then process
    Full,

    /// List the built-in jurisdiction table
    Jurisdictions,
}

impl Commands {
    /// Queue action behind this command, if it has one
    pub fn action(self) -> Option<QueueAction> {
        match self {
            Commands::Transfer => Some(QueueAction::Transfer),
            Commands::Status => Some(QueueAction::Status),
            Commands::Process => Some(QueueAction::Process),
            Commands::Full => Some(QueueAction::Full),
            Commands::Jurisdictions => None,
        }
    }
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            roots: self.roots.clone(),
            patterns: self.patterns.clone(),
            queue_dir: self.queue_dir.clone(),
            timeout_secs: self.timeout,
            process_timeout_secs: self.process_timeout,
        }
    }
}
