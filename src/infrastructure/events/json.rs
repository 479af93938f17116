//! JSON Event Sink
//!
//! Outputs batch events as NDJSON for CI/automation consumption.

use crate::domain::entities::Jurisdiction;
use crate::domain::ports::{BatchEvent, BatchEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn jurisdiction_json(jurisdiction: &Jurisdiction) -> serde_json::Value {
    match jurisdiction.record() {
        Some(record) => serde_json::json!({
            "code": record.code(),
            "name": record.display_name(),
            "location_id": record.external_location_id(),
        }),
        None => serde_json::Value::Null,
    }
}

impl BatchEventSink for JsonEventSink {
    fn on_event(&self, event: BatchEvent) {
        let json = match event {
            BatchEvent::RootMissing { root } => {
                serde_json::json!({
                    "event": "root_missing",
                    "command": "transfer",
                    "root": root.display().to_string(),
                })
            }

            BatchEvent::RootUnreadable { root, reason } => {
                serde_json::json!({
                    "event": "root_unreadable",
                    "command": "transfer",
                    "root": root.display().to_string(),
                    "error": reason,
                })
            }

            BatchEvent::Located { candidate_count } => {
                serde_json::json!({
                    "event": "located",
                    "command": "transfer",
                    "count": candidate_count,
                })
            }

            BatchEvent::Resolved {
                index,
                path,
                jurisdiction,
            } => {
                serde_json::json!({
                    "event": "resolved",
                    "command": "transfer",
                    "index": index,
                    "path": path.display().to_string(),
                    "jurisdiction": jurisdiction_json(&jurisdiction),
                })
            }

            BatchEvent::DispatchStarted {
                index, total, path, ..
            } => {
                serde_json::json!({
                    "event": "item_start",
                    "command": "transfer",
                    "index": index,
                    "total": total,
                    "path": path.display().to_string(),
                })
            }

            BatchEvent::DispatchFinished { index, result } => {
                let path = result.file().path().display().to_string();
                if result.is_success() {
                    serde_json::json!({
                        "event": "item_queued",
                        "command": "transfer",
                        "index": index,
                        "path": path,
                        "output": result.output(),
                    })
                } else {
                    serde_json::json!({
                        "event": "item_error",
                        "command": "transfer",
                        "index": index,
                        "path": path,
                        "error": result.diagnostic(),
                    })
                }
            }

            BatchEvent::TransferCompleted { summary } => {
                let status = if summary.is_success() {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "transfer",
                    "status": status,
                    "succeeded": summary.succeeded(),
                    "failed": summary.failed(),
                    "total": summary.total(),
                })
            }

            BatchEvent::QueueCommandStarted { step } => {
                serde_json::json!({
                    "event": "start",
                    "command": step.as_str(),
                })
            }

            BatchEvent::QueueCommandFinished {
                step,
                output,
                error,
            } => match (output, error) {
                (Some(output), _) => {
                    let status = if output.is_success() {
                        "success"
                    } else {
                        "failed"
                    };
                    serde_json::json!({
                        "event": "complete",
                        "command": step.as_str(),
                        "status": status,
                        "exit_code": output.exit_code,
                        "stdout": output.stdout,
                        "stderr": output.stderr,
                    })
                }
                (None, error) => {
                    serde_json::json!({
                        "event": "error",
                        "command": step.as_str(),
                        "message": error,
                    })
                }
            },
        };

        self.write_event(json);
    }
}
