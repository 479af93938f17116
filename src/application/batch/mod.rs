//! Batch Module
//!
//! Orchestrates locate → resolve → dispatch, plus the queue's status and
//! process commands.
//!
//! ## Structure
//!
//! - `result` - Result types (`BatchReport`, `QueueStepReport`, `ActionReport`)
//! - `use_case` - Core orchestration logic (`BatchOrchestrator`)
//!
//! ## Usage
//!
//! ```ignore
//! use mortality_relay::application::batch::BatchOrchestrator;
//!
//! let orchestrator = BatchOrchestrator::new(locator, resolver, queue);
//! let report = orchestrator.run_batch(&selection, &sink)?;
//! ```

mod result;
mod use_case;

pub use result::{ActionReport, BatchReport, QueueStepReport};
pub use use_case::BatchOrchestrator;
