//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Source root scanning (FsLocator)
//! - `queue/` - External queue tool invocation (CommandQueue)
//! - `events/` - Event sinks (JsonEventSink)

pub mod events;
pub mod fs;
pub mod queue;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::FsLocator;
pub use queue::CommandQueue;
