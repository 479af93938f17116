//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod batch_events;
pub mod file_locator;
pub mod queue_client;

pub use batch_events::{BatchEvent, BatchEventSink, NoopEventSink};
pub use file_locator::{FileLocator, LocateReport, UnreadableRoot};
pub use queue_client::{CommandOutput, QueueClient, QueueError, QueueResult};
