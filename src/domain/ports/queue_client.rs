//! Queue Client Port
//!
//! The external queue is an opaque collaborator with three operations. Each
//! one is observed only through its exit status and captured output.

use std::path::Path;
use std::time::Duration;

/// Captured result of one external command run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

impl CommandOutput {
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Best description of a failed run: stderr, else the exit status
    pub fn failure_diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        match self.exit_code {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Error when a queue command could not be run to completion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// The process could not be started (missing executable, bad cwd, ...)
    #[error("could not start '{program}': {message}")]
    Spawn { program: String, message: String },
    /// The process outlived its deadline and was killed
    #[error("timed out after {}s", .after.as_secs())]
    TimedOut { after: Duration },
    /// Waiting on or reading from the process failed
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Trait for the external queue
///
/// Implementations:
/// - `CommandQueue` - runs the configured queue tool as a child process
/// - test doubles returning canned outputs
pub trait QueueClient {
    /// Human-readable description of where commands go
    fn describe(&self) -> String;

    /// Submit one file. The path is the command's only positional argument.
    fn enqueue(&self, path: &Path) -> QueueResult<CommandOutput>;

    /// Report queue state
    fn status(&self) -> QueueResult<CommandOutput>;

    /// Process everything in the queue
    fn process_all(&self) -> QueueResult<CommandOutput>;
}
