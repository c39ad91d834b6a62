#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

/// Deserialization shapes for manifest documents.
mod document;

/// Implements the [`ManifestRegistry`].
mod registry;
pub use self::registry::{ManifestError, ManifestRegistry};
