#![doc = include_str!("../README.md")]
#![cfg_attr(test, deny(warnings))]

/// In-memory and counting package metadata sources.
mod registry;
pub use self::registry::{CountingRegistry, MemoryRegistry};
