//! Human-readable rendering of batch events

use std::cell::Cell;

use mortality_relay::domain::ports::{BatchEvent, BatchEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::{queue, transfer};

/// Prints each event as it happens. Warnings go to stderr, the rest to stdout.
pub struct ConsoleBatchSink {
    ui: UiContext,
    hints: bool,
    total: Cell<usize>,
}

impl ConsoleBatchSink {
    /// `hints` prints the follow-up commands after a transfer
    pub fn new(ui: UiContext, hints: bool) -> Self {
        Self {
            ui,
            hints,
            total: Cell::new(0),
        }
    }
}

impl BatchEventSink for ConsoleBatchSink {
    fn on_event(&self, event: BatchEvent) {
        let (color, unicode) = (self.ui.color, self.ui.unicode);

        match event {
            BatchEvent::RootMissing { root } => {
                eprintln!("{}", transfer::render_root_missing(&root, color, unicode));
            }
            BatchEvent::RootUnreadable { root, reason } => {
                eprintln!(
                    "{}",
                    transfer::render_root_unreadable(&root, &reason, color, unicode)
                );
            }
            BatchEvent::Located { candidate_count } => {
                self.total.set(candidate_count);
                println!("{}", transfer::render_header(color, unicode));
                println!("{}", transfer::render_found(candidate_count, color, unicode));
            }
            BatchEvent::Resolved {
                path, jurisdiction, ..
            } => {
                println!(
                    "{}",
                    transfer::render_preview_line(&path, &jurisdiction, color, unicode)
                );
            }
            BatchEvent::DispatchStarted { index, .. } => {
                if index == 0 {
                    println!();
                }
            }
            BatchEvent::DispatchFinished { index, result } => {
                println!(
                    "{}",
                    transfer::render_dispatch_line(
                        index,
                        self.total.get(),
                        &result,
                        self.ui.verbose > 0,
                        color,
                        unicode
                    )
                );
            }
            BatchEvent::TransferCompleted { summary } => {
                println!();
                println!(
                    "{}",
                    transfer::render_summary(&summary, self.hints, color, unicode)
                );
            }
            BatchEvent::QueueCommandStarted { step } => {
                println!();
                println!("{}", queue::render_step_header(step, color, unicode));
            }
            BatchEvent::QueueCommandFinished {
                step,
                output,
                error,
            } => {
                println!(
                    "{}",
                    queue::render_step_result(
                        step,
                        output.as_ref(),
                        error.as_deref(),
                        color,
                        unicode
                    )
                );
            }
        }
    }
}
