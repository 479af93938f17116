//! Local File Locator
//!
//! Scans source roots on local disk for export files.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::CandidateFile;
use crate::domain::ports::{FileLocator, LocateReport, UnreadableRoot};
use crate::domain::value_objects::FilePattern;
use crate::error::RelayResult;

/// Non-recursive directory scan
///
/// Only regular files directly inside each root are considered; symlinks are
/// followed, so a link to a CSV counts as that CSV. Roots are canonicalized
/// first, so the same directory listed twice yields each file once.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLocator;

impl FsLocator {
    pub fn new() -> Self {
        Self
    }

    /// Matches in one root. Nothing is returned unless the whole listing succeeds.
    fn scan_root(&self, root: &Path, patterns: &[FilePattern]) -> io::Result<Vec<CandidateFile>> {
        let mut matches = Vec::new();
        for entry in std::fs::read_dir(root)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            let Some(pattern) = patterns.iter().find(|p| p.matches(&name)) else {
                continue;
            };

            debug!(path = %path.display(), %pattern, "matched");
            matches.push(CandidateFile::new(path, pattern.as_str()));
        }
        Ok(matches)
    }
}

impl FileLocator for FsLocator {
    fn locate(&self, roots: &[PathBuf], patterns: &[FilePattern]) -> RelayResult<LocateReport> {
        let mut found = BTreeMap::new();
        let mut report = LocateReport::default();

        for root in roots {
            if report.is_failed_root(root) {
                continue;
            }

            let scanned = match root.canonicalize() {
                Ok(canonical) => self.scan_root(&canonical, patterns),
                Err(e) => Err(e),
            };

            match scanned {
                Ok(matches) => {
                    for candidate in matches {
                        found
                            .entry(candidate.path().to_path_buf())
                            .or_insert(candidate);
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    report.missing_roots.push(root.clone());
                }
                Err(e) => {
                    warn!(root = %root.display(), error = %e, "cannot scan source root");
                    report.unreadable_roots.push(UnreadableRoot {
                        root: root.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        report.candidates = found.into_values().collect();
        Ok(report)
    }
}
