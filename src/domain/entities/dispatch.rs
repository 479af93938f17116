//! Dispatch results and the batch summary

use super::candidate::ResolvedFile;

/// How one hand-off attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Success,
    Failure,
}

/// Outcome of handing one file to the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    file: ResolvedFile,
    outcome: DispatchOutcome,
    diagnostic: Option<String>,
    output: Option<String>,
}

impl DispatchResult {
    /// Successful hand-off, keeping the queue's acknowledgement text if any
    pub fn success(file: ResolvedFile, output: impl Into<String>) -> Self {
        let output = output.into().trim().to_string();
        Self {
            file,
            outcome: DispatchOutcome::Success,
            diagnostic: None,
            output: (!output.is_empty()).then_some(output),
        }
    }

    pub fn failure(file: ResolvedFile, diagnostic: impl Into<String>) -> Self {
        Self {
            file,
            outcome: DispatchOutcome::Failure,
            diagnostic: Some(diagnostic.into().trim().to_string()),
            output: None,
        }
    }

    pub fn file(&self) -> &ResolvedFile {
        &self.file
    }

    pub fn outcome(&self) -> DispatchOutcome {
        self.outcome
    }

    pub fn is_success(&self) -> bool {
        self.outcome == DispatchOutcome::Success
    }

    /// Why the hand-off failed
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    /// Trimmed stdout of a successful enqueue
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

/// Counts for one batch. `succeeded + failed == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    succeeded: usize,
    failed: usize,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &DispatchResult) {
        match result.outcome() {
            DispatchOutcome::Success => self.succeeded += 1,
            DispatchOutcome::Failure => self.failed += 1,
        }
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl<'a> FromIterator<&'a DispatchResult> for BatchSummary {
    fn from_iter<I: IntoIterator<Item = &'a DispatchResult>>(iter: I) -> Self {
        let mut summary = BatchSummary::new();
        for result in iter {
            summary.record(result);
        }
        summary
    }
}
