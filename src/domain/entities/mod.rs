//! Domain Entities

mod candidate;
mod dispatch;
mod jurisdiction;

pub use candidate::{CandidateFile, ResolvedFile};
pub use dispatch::{BatchSummary, DispatchOutcome, DispatchResult};
pub use jurisdiction::{Jurisdiction, JurisdictionRecord};
