//! Error types for mortality-relay
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.
//! Only configuration-level problems are errors here. Per-file dispatch
//! failures never leave the batch as an `Err`, they become `DispatchResult`s.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for relay operations
pub type RelayResult<T> = Result<T, RelayError>;

/// Main error type for relay operations
#[derive(Error, Debug)]
pub enum RelayError {
    /// A configured source root does not exist
    #[error("source root not found: {root}")]
    RootNotFound { root: PathBuf },

    /// A configured source root exists but could not be listed
    #[error("cannot read source root {root}: {message}")]
    RootUnreadable { root: PathBuf, message: String },

    /// Every configured source root was missing or unreadable
    #[error("none of the configured source roots could be scanned ({} checked)", .roots.len())]
    NoUsableRoots { roots: Vec<PathBuf> },

    /// Nothing to scan: no roots or no patterns
    #[error("no {what} configured - pass --{flag} or set it in the config file")]
    NothingConfigured {
        what: &'static str,
        flag: &'static str,
    },

    /// Glob pattern failed to compile
    #[error("invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config value outside its allowed range
    #[error("invalid value for '{key}': {message}")]
    InvalidSetting { key: &'static str, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_root_not_found() {
        let err = RelayError::RootNotFound {
            root: PathBuf::from("/data/processed_csvs"),
        };
        assert_eq!(err.to_string(), "source root not found: /data/processed_csvs");
    }

    #[test]
    fn test_error_display_nothing_configured() {
        let err = RelayError::NothingConfigured {
            what: "source roots",
            flag: "root",
        };
        assert_eq!(
            err.to_string(),
            "no source roots configured - pass --root or set it in the config file"
        );
    }

    #[test]
    fn test_error_display_root_unreadable() {
        let err = RelayError::RootUnreadable {
            root: PathBuf::from("/data/TX_deaths.csv"),
            message: "Not a directory (os error 20)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot read source root /data/TX_deaths.csv: Not a directory (os error 20)"
        );
    }

    #[test]
    fn test_error_display_no_usable_roots_counts() {
        let err = RelayError::NoUsableRoots {
            roots: vec![PathBuf::from("a"), PathBuf::from("b")],
        };
        assert!(err.to_string().contains("2 checked"));
    }
}
