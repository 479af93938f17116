//! Domain Services
//!
//! Stateless domain logic. Nothing here touches the file system or spawns
//! processes.

mod registry;
mod resolver;

pub use registry::JurisdictionRegistry;
pub use resolver::{
    JurisdictionResolver, PrefixCodeStrategy, ResolutionStrategy, SubstringNameStrategy,
};
