//! File System Implementations
//!
//! Concrete implementations of the FileLocator port.

mod locator;

pub use locator::FsLocator;
