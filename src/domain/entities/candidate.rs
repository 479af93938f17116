//! Candidate and resolved files
//!
//! A `CandidateFile` is what the locator found on disk. Once the resolver has
//! attached a jurisdiction it becomes a `ResolvedFile`.

use std::path::{Path, PathBuf};

use super::jurisdiction::Jurisdiction;

/// A discovered file that has not been classified or dispatched yet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidateFile {
    absolute_path: PathBuf,
    discovered_via: String,
}

impl CandidateFile {
    pub fn new(absolute_path: impl Into<PathBuf>, discovered_via: impl Into<String>) -> Self {
        Self {
            absolute_path: absolute_path.into(),
            discovered_via: discovered_via.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.absolute_path
    }

    /// The pattern that first matched this file
    pub fn discovered_via(&self) -> &str {
        &self.discovered_via
    }

    /// Final path component, lossily decoded
    pub fn file_name(&self) -> String {
        self.absolute_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without its extension, lossily decoded
    pub fn stem(&self) -> String {
        self.absolute_path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// A candidate with its jurisdiction attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    candidate: CandidateFile,
    jurisdiction: Jurisdiction,
}

impl ResolvedFile {
    pub fn new(candidate: CandidateFile, jurisdiction: Jurisdiction) -> Self {
        Self {
            candidate,
            jurisdiction,
        }
    }

    pub fn candidate(&self) -> &CandidateFile {
        &self.candidate
    }

    pub fn path(&self) -> &Path {
        self.candidate.path()
    }

    pub fn file_name(&self) -> String {
        self.candidate.file_name()
    }

    pub fn jurisdiction(&self) -> &Jurisdiction {
        &self.jurisdiction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_drops_extension() {
        let file = CandidateFile::new("/data/FL_20251118_210521_us_recent_deaths.csv", "*.csv");
        assert_eq!(file.stem(), "FL_20251118_210521_us_recent_deaths");
        assert_eq!(file.file_name(), "FL_20251118_210521_us_recent_deaths.csv");
    }

    #[test]
    fn candidates_order_by_path() {
        let a = CandidateFile::new("/data/AL.csv", "z*");
        let b = CandidateFile::new("/data/TX.csv", "a*");
        assert!(a < b);
    }

    #[test]
    fn resolved_file_exposes_candidate_path() {
        let file = ResolvedFile::new(
            CandidateFile::new("/data/mystery_export.csv", "*.csv"),
            Jurisdiction::Unknown,
        );
        assert_eq!(file.path(), Path::new("/data/mystery_export.csv"));
        assert_eq!(file.jurisdiction(), &Jurisdiction::Unknown);
    }
}
