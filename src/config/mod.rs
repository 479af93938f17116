//! Configuration module for mortality-relay
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RELAY_*)
//! 3. Config file (`--config`, `./mortality-relay.toml`, or
//!    `<config dir>/mortality-relay/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{expand_home, ConfigWarning, LoadedConfig, CONFIG_FILE_NAME};
pub use types::{CliOverrides, ColorMode, Config, OutputConfig, QueueConfig, SourceConfig};
