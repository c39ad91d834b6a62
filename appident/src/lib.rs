#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

/// Re-exports the application identity surface.
pub use appident_core::{
    AppHandle, AppIdentity, ApplicationInfo, MetadataBundle, PackageInfo, PackageLookupError,
    PackageMetadataSource, CUSTOM_UUID_METADATA_KEY,
};

/// Re-exports the manifest-backed metadata source.
#[cfg(feature = "manifest")]
pub use appident_manifest::{ManifestError, ManifestRegistry};
