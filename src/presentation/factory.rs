//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::BatchOrchestrator;
use crate::config::Config;
use crate::domain::services::{JurisdictionRegistry, JurisdictionResolver};
use crate::error::RelayResult;
use crate::infrastructure::{CommandQueue, FsLocator};

/// Type alias for the concrete orchestrator with all dependencies
pub type ConcreteOrchestrator = BatchOrchestrator<FsLocator, CommandQueue>;

/// Resolver over the built-in jurisdiction table with the default strategies
pub fn create_resolver() -> JurisdictionResolver {
    JurisdictionResolver::new(JurisdictionRegistry::builtin())
}

/// Create an orchestrator with all dependencies wired up
///
/// Fails when the queue section of the config is unusable.
pub fn create_orchestrator(config: &Config) -> RelayResult<ConcreteOrchestrator> {
    let queue = config.command_queue()?;
    Ok(BatchOrchestrator::new(
        FsLocator::new(),
        create_resolver(),
        queue,
    ))
}
