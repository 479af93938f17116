//! Source selection value object - which roots to scan, with which patterns.

use std::path::PathBuf;

use crate::error::{RelayError, RelayResult};

use super::FilePattern;

/// Roots and patterns for one transfer.
///
/// Both lists are non-empty; an empty one is a configuration error caught
/// before any work starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSelection {
    roots: Vec<PathBuf>,
    patterns: Vec<FilePattern>,
}

impl SourceSelection {
    pub fn new(roots: Vec<PathBuf>, patterns: Vec<FilePattern>) -> RelayResult<Self> {
        if roots.is_empty() {
            return Err(RelayError::NothingConfigured {
                what: "source roots",
                flag: "root",
            });
        }
        if patterns.is_empty() {
            return Err(RelayError::NothingConfigured {
                what: "file patterns",
                flag: "pattern",
            });
        }
        Ok(Self { roots, patterns })
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn patterns(&self) -> &[FilePattern] {
        &self.patterns
    }
}
