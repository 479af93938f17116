//! Application Layer
//!
//! Use cases that orchestrate the relay flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BatchOrchestrator` - locate, resolve, dispatch, then status/process
//! - `DispatchClient` - single enqueue with outcome classification

pub mod batch;
pub mod dispatch;

pub use batch::{ActionReport, BatchOrchestrator, BatchReport, QueueStepReport};
pub use dispatch::DispatchClient;
