//! Batch Event Port
//!
//! Provides an observable interface for orchestrator runs.
//! Enables per-file progress output and NDJSON event streams.

use std::path::PathBuf;

use crate::domain::entities::{BatchSummary, DispatchResult, Jurisdiction};
use crate::domain::ports::CommandOutput;
use crate::domain::value_objects::QueueStep;

/// Event emitted while an action runs
#[derive(Debug, Clone)]
pub enum BatchEvent {
    /// A configured root does not exist (scan continues with the others)
    RootMissing { root: PathBuf },

    /// A configured root exists but could not be listed (scan continues)
    RootUnreadable { root: PathBuf, reason: String },

    /// Discovery finished
    Located { candidate_count: usize },

    /// A candidate's jurisdiction is known (emitted for every file before any dispatch)
    Resolved {
        index: usize,
        path: PathBuf,
        jurisdiction: Jurisdiction,
    },

    /// Dispatch of one file is about to start
    DispatchStarted {
        index: usize,
        total: usize,
        path: PathBuf,
        jurisdiction: Jurisdiction,
    },

    /// Dispatch of one file finished
    DispatchFinished { index: usize, result: DispatchResult },

    /// Transfer completed
    TransferCompleted { summary: BatchSummary },

    /// A status or process command is about to run
    QueueCommandStarted { step: QueueStep },

    /// A status or process command finished (or could not run)
    QueueCommandFinished {
        step: QueueStep,
        output: Option<CommandOutput>,
        error: Option<String>,
    },
}

/// Trait for receiving batch events
///
/// Implementations can be:
/// - ConsoleBatchSink: per-file lines in the terminal
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
pub trait BatchEventSink {
    /// Handle a batch event
    fn on_event(&self, event: BatchEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BatchEventSink for NoopEventSink {
    fn on_event(&self, _event: BatchEvent) {}
}
