pub mod jurisdictions;
pub mod queue;
pub mod transfer;
