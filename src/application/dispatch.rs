//! Dispatch Client
//!
//! Hands one resolved file to the queue and classifies what happened.

use tracing::{debug, warn};

use crate::domain::entities::{DispatchResult, ResolvedFile};
use crate::domain::ports::QueueClient;

/// Single-attempt enqueue with outcome classification.
///
/// Exit status zero is success. A non-zero status, a process that could not
/// be started, or one that timed out is a failure carrying a diagnostic.
/// There is no retry here; re-running the batch is the retry.
pub struct DispatchClient<Q>
where
    Q: QueueClient,
{
    queue: Q,
}

impl<Q> DispatchClient<Q>
where
    Q: QueueClient,
{
    pub fn new(queue: Q) -> Self {
        Self { queue }
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    pub fn dispatch(&self, file: ResolvedFile) -> DispatchResult {
        match self.queue.enqueue(file.path()) {
            Ok(output) if output.is_success() => {
                debug!(
                    path = %file.path().display(),
                    elapsed_ms = output.elapsed.as_millis() as u64,
                    "enqueued"
                );
                DispatchResult::success(file, output.stdout)
            }
            Ok(output) => {
                let diagnostic = output.failure_diagnostic();
                warn!(path = %file.path().display(), exit_code = ?output.exit_code, %diagnostic, "enqueue failed");
                DispatchResult::failure(file, diagnostic)
            }
            Err(err) => {
                warn!(path = %file.path().display(), error = %err, "enqueue could not run");
                DispatchResult::failure(file, err.to_string())
            }
        }
    }
}
