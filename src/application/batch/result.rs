//! Batch Results
//!
//! Result types for orchestrator actions.

use std::path::PathBuf;

use crate::domain::entities::{BatchSummary, DispatchResult};
use crate::domain::ports::{CommandOutput, UnreadableRoot};
use crate::domain::value_objects::QueueStep;

/// Result of one transfer
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One entry per candidate, in dispatch order
    pub results: Vec<DispatchResult>,
    pub summary: BatchSummary,
    /// Roots that were configured but absent
    pub missing_roots: Vec<PathBuf>,
    /// Roots that exist but could not be listed
    pub unreadable_roots: Vec<UnreadableRoot>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.summary.is_success()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DispatchResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}

/// Result of a status or process command
#[derive(Debug, Clone)]
pub struct QueueStepReport {
    pub step: QueueStep,
    /// Present when the command ran to completion
    pub output: Option<CommandOutput>,
    /// Present when the command could not be run or timed out
    pub error: Option<String>,
}

impl QueueStepReport {
    pub fn is_success(&self) -> bool {
        self.output.as_ref().is_some_and(CommandOutput::is_success)
    }
}

/// Result of a whole action (`full` fills every field)
#[derive(Debug, Clone, Default)]
pub struct ActionReport {
    pub transfer: Option<BatchReport>,
    pub queue_steps: Vec<QueueStepReport>,
}

impl ActionReport {
    pub fn is_success(&self) -> bool {
        self.transfer.as_ref().map_or(true, BatchReport::is_success)
            && self.queue_steps.iter().all(QueueStepReport::is_success)
    }
}
