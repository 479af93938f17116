//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_pattern;
mod queue_action;
mod source_selection;

pub use file_pattern::{FilePattern, DEFAULT_PATTERNS};
pub use queue_action::{QueueAction, QueueStep};
pub use source_selection::SourceSelection;
