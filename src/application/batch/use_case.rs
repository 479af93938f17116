//! Batch Orchestrator
//!
//! Runs the relay's actions over a locator, a resolver and a queue.

use tracing::{info, warn};

use crate::application::dispatch::DispatchClient;
use crate::domain::entities::{BatchSummary, ResolvedFile};
use crate::domain::ports::{
    BatchEvent, BatchEventSink, CommandOutput, FileLocator, QueueClient, QueueResult,
};
use crate::domain::services::JurisdictionResolver;
use crate::domain::value_objects::{QueueAction, QueueStep, SourceSelection};
use crate::error::{RelayError, RelayResult};

use super::result::{ActionReport, BatchReport, QueueStepReport};

/// Batch orchestrator - sequences locate, resolve and dispatch
///
/// Strictly sequential: one external command at a time, files in sorted
/// path order. A failed file never stops the batch; only configuration
/// problems and "no configured root could be scanned" end a run early.
pub struct BatchOrchestrator<L, Q>
where
    L: FileLocator,
    Q: QueueClient,
{
    locator: L,
    resolver: JurisdictionResolver,
    dispatcher: DispatchClient<Q>,
}

impl<L, Q> BatchOrchestrator<L, Q>
where
    L: FileLocator,
    Q: QueueClient,
{
    pub fn new(locator: L, resolver: JurisdictionResolver, queue: Q) -> Self {
        Self {
            locator,
            resolver,
            dispatcher: DispatchClient::new(queue),
        }
    }

    pub fn resolver(&self) -> &JurisdictionResolver {
        &self.resolver
    }

    pub fn queue(&self) -> &Q {
        self.dispatcher.queue()
    }

    /// Run an action. `source` is required when the action transfers files.
    ///
    /// `Full` runs all three steps regardless of how the transfer went; only a
    /// fatal transfer error stops it.
    pub fn run_action(
        &self,
        action: QueueAction,
        source: Option<&SourceSelection>,
        sink: &dyn BatchEventSink,
    ) -> RelayResult<ActionReport> {
        let mut report = ActionReport::default();

        for step in action.steps() {
            match step {
                QueueStep::Transfer => {
                    let source = source.ok_or(RelayError::NothingConfigured {
                        what: "source roots",
                        flag: "root",
                    })?;
                    report.transfer = Some(self.run_batch(source, sink)?);
                }
                QueueStep::Status => report.queue_steps.push(self.status(sink)),
                QueueStep::Process => report.queue_steps.push(self.process(sink)),
            }
        }

        Ok(report)
    }

    /// Locate, resolve and dispatch every candidate once
    pub fn run_batch(
        &self,
        source: &SourceSelection,
        sink: &dyn BatchEventSink,
    ) -> RelayResult<BatchReport> {
        let located = self.locator.locate(source.roots(), source.patterns())?;

        for root in &located.missing_roots {
            warn!(root = %root.display(), "source root not found");
            sink.on_event(BatchEvent::RootMissing { root: root.clone() });
        }
        for unreadable in &located.unreadable_roots {
            sink.on_event(BatchEvent::RootUnreadable {
                root: unreadable.root.clone(),
                reason: unreadable.reason.clone(),
            });
        }
        if source.roots().iter().all(|root| located.is_failed_root(root)) {
            return Err(RelayError::NoUsableRoots {
                roots: located.failed_roots(),
            });
        }

        info!(count = located.candidates.len(), "located candidate files");
        sink.on_event(BatchEvent::Located {
            candidate_count: located.candidates.len(),
        });

        let resolved: Vec<ResolvedFile> = located
            .candidates
            .into_iter()
            .map(|candidate| self.resolver.resolve(candidate))
            .collect();

        for (index, file) in resolved.iter().enumerate() {
            sink.on_event(BatchEvent::Resolved {
                index,
                path: file.path().to_path_buf(),
                jurisdiction: file.jurisdiction().clone(),
            });
        }

        let total = resolved.len();
        let mut summary = BatchSummary::new();
        let mut results = Vec::with_capacity(total);

        for (index, file) in resolved.into_iter().enumerate() {
            sink.on_event(BatchEvent::DispatchStarted {
                index,
                total,
                path: file.path().to_path_buf(),
                jurisdiction: file.jurisdiction().clone(),
            });

            let result = self.dispatcher.dispatch(file);
            summary.record(&result);

            sink.on_event(BatchEvent::DispatchFinished {
                index,
                result: result.clone(),
            });
            results.push(result);
        }

        info!(
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            total = summary.total(),
            "transfer finished"
        );
        sink.on_event(BatchEvent::TransferCompleted { summary });

        Ok(BatchReport {
            results,
            summary,
            missing_roots: located.missing_roots,
            unreadable_roots: located.unreadable_roots,
        })
    }

    /// Ask the queue for its status (best effort)
    pub fn status(&self, sink: &dyn BatchEventSink) -> QueueStepReport {
        self.queue_step(QueueStep::Status, sink, |queue| queue.status())
    }

    /// Ask the queue to process everything (best effort)
    pub fn process(&self, sink: &dyn BatchEventSink) -> QueueStepReport {
        self.queue_step(QueueStep::Process, sink, |queue| queue.process_all())
    }

    fn queue_step(
        &self,
        step: QueueStep,
        sink: &dyn BatchEventSink,
        run: impl FnOnce(&Q) -> QueueResult<CommandOutput>,
    ) -> QueueStepReport {
        sink.on_event(BatchEvent::QueueCommandStarted { step });

        let report = match run(self.dispatcher.queue()) {
            Ok(output) => {
                if !output.is_success() {
                    warn!(%step, exit_code = ?output.exit_code, "queue command failed");
                }
                QueueStepReport {
                    step,
                    output: Some(output),
                    error: None,
                }
            }
            Err(err) => {
                warn!(%step, error = %err, "queue command could not run");
                QueueStepReport {
                    step,
                    output: None,
                    error: Some(err.to_string()),
                }
            }
        };

        sink.on_event(BatchEvent::QueueCommandFinished {
            step,
            output: report.output.clone(),
            error: report.error.clone(),
        });
        report
    }
}
