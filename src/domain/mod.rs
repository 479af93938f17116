//! Domain Layer
//!
//! The relay's core rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Jurisdictions, candidate/resolved files, dispatch results
//! - `value_objects/` - File patterns and queue actions
//! - `services/` - Jurisdiction registry and filename resolver
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Explicit state** - The registry is constructed and passed in, never global
//! 3. **Ports & Adapters** - Discovery and the queue go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
