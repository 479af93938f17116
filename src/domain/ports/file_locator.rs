//! File Locator Port
//!
//! Discovery of candidate export files under a set of source roots.

use std::path::{Path, PathBuf};

use crate::domain::entities::CandidateFile;
use crate::domain::value_objects::FilePattern;
use crate::error::{RelayError, RelayResult};

/// What a scan found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocateReport {
    /// Unique by absolute path, sorted by path
    pub candidates: Vec<CandidateFile>,
    /// Configured roots that do not exist, in configured order
    pub missing_roots: Vec<PathBuf>,
    /// Roots that exist but could not be listed (not a directory, permissions)
    pub unreadable_roots: Vec<UnreadableRoot>,
}

/// A root that exists but could not be scanned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableRoot {
    pub root: PathBuf,
    pub reason: String,
}

impl LocateReport {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// One error per root that contributed nothing to the scan
    pub fn root_errors(&self) -> Vec<RelayError> {
        let missing = self
            .missing_roots
            .iter()
            .map(|root| RelayError::RootNotFound { root: root.clone() });
        let unreadable = self
            .unreadable_roots
            .iter()
            .map(|u| RelayError::RootUnreadable {
                root: u.root.clone(),
                message: u.reason.clone(),
            });
        missing.chain(unreadable).collect()
    }

    /// Whether `root` was skipped, either missing or unreadable
    pub fn is_failed_root(&self, root: &Path) -> bool {
        self.missing_roots.iter().any(|r| r == root)
            || self.unreadable_roots.iter().any(|u| u.root == root)
    }

    /// Every skipped root, missing ones first
    pub fn failed_roots(&self) -> Vec<PathBuf> {
        self.missing_roots
            .iter()
            .cloned()
            .chain(self.unreadable_roots.iter().map(|u| u.root.clone()))
            .collect()
    }
}

/// Trait for candidate discovery
///
/// A missing or unreadable root is recorded in the report rather than failing
/// the scan, so the other roots are still searched. `Err` is reserved for problems that make
/// the whole scan meaningless.
pub trait FileLocator {
    fn locate(&self, roots: &[PathBuf], patterns: &[FilePattern]) -> RelayResult<LocateReport>;
}
