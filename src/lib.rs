//! mortality-relay - hands scraped mortality exports to the ingestion queue
//!
//! Finds export files under configured source roots, works out which
//! jurisdiction each one belongs to, and submits them one at a time to an
//! external queue tool. The queue's own status and process commands can be
//! driven from the same CLI.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ActionReport, BatchOrchestrator, BatchReport, DispatchClient};
pub use config::Config;
pub use domain::entities::{BatchSummary, DispatchResult, Jurisdiction, JurisdictionRecord};
pub use domain::services::{JurisdictionRegistry, JurisdictionResolver};
pub use domain::value_objects::{FilePattern, QueueAction, SourceSelection};
pub use error::{RelayError, RelayResult};
