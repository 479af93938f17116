//! Queue Implementations
//!
//! Concrete implementations of the QueueClient port.

mod command;
mod process;

pub use command::{
    CommandQueue, DEFAULT_ENQUEUE_ARGS, DEFAULT_PROCESS_ARGS, DEFAULT_PROGRAM,
    DEFAULT_PROCESS_TIMEOUT_SECS, DEFAULT_STATUS_ARGS, DEFAULT_TIMEOUT_SECS,
};
