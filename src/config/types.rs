//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FilePattern, SourceSelection};
use crate::error::{RelayError, RelayResult};
use crate::infrastructure::queue::{
    CommandQueue, DEFAULT_ENQUEUE_ARGS, DEFAULT_PROCESS_ARGS, DEFAULT_PROGRAM,
    DEFAULT_PROCESS_TIMEOUT_SECS, DEFAULT_STATUS_ARGS, DEFAULT_TIMEOUT_SECS,
};

use super::loader::{self, expand_home, ConfigWarning, LoadedConfig};

/// Where export files are found
///
/// ```toml
/// [source]
/// roots = ["~/scraper/processed_csvs"]
/// patterns = ["*_deaths.csv"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceConfig {
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Empty means the built-in pattern list
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// How the external queue tool is invoked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Directory the queue tool runs in
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_enqueue_args")]
    pub enqueue_args: Vec<String>,

    #[serde(default = "default_status_args")]
    pub status_args: Vec<String>,

    #[serde(default = "default_process_args")]
    pub process_args: Vec<String>,

    /// Deadline for one enqueue
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Deadline for the status and process commands
    #[serde(default = "default_process_timeout_secs")]
    pub process_timeout_secs: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            working_dir: None,
            program: default_program(),
            enqueue_args: default_enqueue_args(),
            status_args: default_status_args(),
            process_args: default_process_args(),
            timeout_secs: default_timeout_secs(),
            process_timeout_secs: default_process_timeout_secs(),
        }
    }
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_enqueue_args() -> Vec<String> {
    owned(DEFAULT_ENQUEUE_ARGS)
}

fn default_status_args() -> Vec<String> {
    owned(DEFAULT_STATUS_ARGS)
}

fn default_process_args() -> Vec<String> {
    owned(DEFAULT_PROCESS_ARGS)
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_process_timeout_secs() -> u64 {
    DEFAULT_PROCESS_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Values given on the command line. Empty lists and `None` leave the
/// lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub roots: Vec<PathBuf>,
    pub patterns: Vec<String>,
    pub queue_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub process_timeout_secs: Option<u64>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub queue: QueueConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RelayResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RelayResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, else the first config file found from `cwd`,
    /// else defaults. Environment overrides are applied on top.
    pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> RelayResult<LoadedConfig> {
        loader::load_or_default(explicit, cwd)
    }

    /// Apply environment variable overrides (RELAY_* prefix)
    pub fn with_env_overrides(self) -> RelayResult<Self> {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Apply command-line values on top of everything else
    pub fn with_cli_overrides(mut self, overrides: &CliOverrides) -> Self {
        if !overrides.roots.is_empty() {
            self.source.roots = overrides.roots.clone();
        }
        if !overrides.patterns.is_empty() {
            self.source.patterns = overrides.patterns.clone();
        }
        if let Some(dir) = &overrides.queue_dir {
            self.queue.working_dir = Some(dir.clone());
        }
        if let Some(secs) = overrides.timeout_secs {
            self.queue.timeout_secs = secs;
        }
        if let Some(secs) = overrides.process_timeout_secs {
            self.queue.process_timeout_secs = secs;
        }
        self
    }

    /// Roots and compiled patterns for a transfer
    pub fn source_selection(&self) -> RelayResult<SourceSelection> {
        let roots = self.source.roots.iter().map(|r| expand_home(r)).collect();
        let patterns = if self.source.patterns.is_empty() {
            FilePattern::defaults()
        } else {
            FilePattern::parse_all(&self.source.patterns)?
        };
        SourceSelection::new(roots, patterns)
    }

    /// Queue client for the configured tool
    pub fn command_queue(&self) -> RelayResult<CommandQueue> {
        let working_dir = self.queue.working_dir.as_deref().ok_or(RelayError::NothingConfigured {
            what: "queue directory",
            flag: "queue-dir",
        })?;

        if self.queue.program.trim().is_empty() {
            return Err(RelayError::InvalidSetting {
                key: "queue.program",
                message: "must not be empty".to_string(),
            });
        }
        if self.queue.timeout_secs == 0 {
            return Err(RelayError::InvalidSetting {
                key: "queue.timeout_secs",
                message: "must be at least 1".to_string(),
            });
        }
        if self.queue.process_timeout_secs == 0 {
            return Err(RelayError::InvalidSetting {
                key: "queue.process_timeout_secs",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(CommandQueue::new(expand_home(working_dir))
            .with_program(self.queue.program.clone())
            .with_enqueue_args(self.queue.enqueue_args.clone())
            .with_status_args(self.queue.status_args.clone())
            .with_process_args(self.queue.process_args.clone())
            .with_timeout(Duration::from_secs(self.queue.timeout_secs))
            .with_step_timeout(Duration::from_secs(self.queue.process_timeout_secs)))
    }
}
