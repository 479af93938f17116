//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use mortality_relay::presentation::factory;
//!
//! let orchestrator = factory::create_orchestrator(&config)?;
//! let report = orchestrator.run_action(action, Some(&source), &sink)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_orchestrator, create_resolver, ConcreteOrchestrator};
