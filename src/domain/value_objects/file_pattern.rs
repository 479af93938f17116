//! File pattern value object
//!
//! A validated glob that selects export files by name inside a source root.

use std::fmt;

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{RelayError, RelayResult};

/// Patterns used when neither the config file nor the CLI names any.
///
/// These cover every naming scheme the scraper has produced so far.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "us_recent_deaths_*.csv",
    "*_us_recent_deaths.csv",
    "*_deaths.csv",
    "deaths_*.csv",
    "mortality_*.csv",
    "*_mortality.csv",
];

/// Compiled glob matched against bare file names.
///
/// `*` never crosses a path separator, so a pattern only selects files that
/// sit directly inside a root.
#[derive(Debug, Clone)]
pub struct FilePattern {
    raw: String,
    matcher: GlobMatcher,
}

impl FilePattern {
    pub fn new(raw: impl Into<String>) -> RelayResult<Self> {
        let raw = raw.into().trim().to_string();
        if raw.is_empty() {
            return Err(RelayError::InvalidPattern {
                pattern: raw,
                message: "pattern is empty".to_string(),
            });
        }

        let glob = GlobBuilder::new(&raw)
            .literal_separator(true)
            .build()
            .map_err(|e| RelayError::InvalidPattern {
                pattern: raw.clone(),
                message: e.kind().to_string(),
            })?;

        Ok(Self {
            matcher: glob.compile_matcher(),
            raw,
        })
    }

    /// Compile a list of patterns, failing on the first bad one
    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> RelayResult<Vec<Self>> {
        raw.iter().map(|p| Self::new(p.as_ref())).collect()
    }

    pub fn defaults() -> Vec<Self> {
        DEFAULT_PATTERNS
            .iter()
            .filter_map(|p| Self::new(*p).ok())
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name)
    }
}

impl PartialEq for FilePattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for FilePattern {}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
