//! Command-line Queue Client
//!
//! Implements QueueClient by running the queue tool as a child process in
//! the queue project's directory. Arguments are passed straight through,
//! never via a shell, so paths with spaces or quotes need no escaping.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use tracing::debug;

use super::process::run_with_timeout;
use crate::domain::ports::{CommandOutput, QueueClient, QueueResult};

pub const DEFAULT_PROGRAM: &str = "npm";
pub const DEFAULT_ENQUEUE_ARGS: &[&str] = &["run", "queue:add", "--"];
pub const DEFAULT_STATUS_ARGS: &[&str] = &["run", "queue:status"];
pub const DEFAULT_PROCESS_ARGS: &[&str] = &["run", "queue:process-all"];
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
/// `process-all` deploys every queued file, so status/process get far longer
pub const DEFAULT_PROCESS_TIMEOUT_SECS: u64 = 3600;

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// Queue reached through an external program
#[derive(Debug, Clone)]
pub struct CommandQueue {
    program: String,
    working_dir: PathBuf,
    enqueue_args: Vec<String>,
    status_args: Vec<String>,
    process_args: Vec<String>,
    timeout: Duration,
    step_timeout: Duration,
}

impl CommandQueue {
    /// Queue using the default `npm run queue:*` scripts
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            working_dir: working_dir.into(),
            enqueue_args: owned(DEFAULT_ENQUEUE_ARGS),
            status_args: owned(DEFAULT_STATUS_ARGS),
            process_args: owned(DEFAULT_PROCESS_ARGS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            step_timeout: Duration::from_secs(DEFAULT_PROCESS_TIMEOUT_SECS),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments placed before the file path
    pub fn with_enqueue_args(mut self, args: Vec<String>) -> Self {
        self.enqueue_args = args;
        self
    }

    pub fn with_status_args(mut self, args: Vec<String>) -> Self {
        self.status_args = args;
        self
    }

    pub fn with_process_args(mut self, args: Vec<String>) -> Self {
        self.process_args = args;
        self
    }

    /// Deadline for each enqueue
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Deadline for the status and process commands
    pub fn with_step_timeout(mut self, timeout: Duration) -> Self {
        self.step_timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn step_timeout(&self) -> Duration {
        self.step_timeout
    }

    fn run(
        &self,
        args: &[String],
        path: Option<&Path>,
        timeout: Duration,
    ) -> QueueResult<CommandOutput> {
        let mut command = Command::new(&self.program);
        command.args(args).current_dir(&self.working_dir);
        if let Some(path) = path {
            command.arg(path);
        }

        debug!(
            program = %self.program,
            ?args,
            path = ?path,
            cwd = %self.working_dir.display(),
            timeout_secs = timeout.as_secs(),
            "running queue command"
        );
        let output = run_with_timeout(command, &self.program, timeout)?;
        debug!(exit_code = ?output.exit_code, elapsed_ms = output.elapsed.as_millis() as u64, "queue command exited");
        Ok(output)
    }
}

impl QueueClient for CommandQueue {
    fn describe(&self) -> String {
        format!("{} (in {})", self.program, self.working_dir.display())
    }

    fn enqueue(&self, path: &Path) -> QueueResult<CommandOutput> {
        self.run(&self.enqueue_args, Some(path), self.timeout)
    }

    fn status(&self) -> QueueResult<CommandOutput> {
        self.run(&self.status_args, None, self.step_timeout)
    }

    fn process_all(&self) -> QueueResult<CommandOutput> {
        self.run(&self.process_args, None, self.step_timeout)
    }
}
