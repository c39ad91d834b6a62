#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

/// Application identity facade.
mod identity;
pub use self::identity::AppIdentity;

/// Application handle.
mod handle;
pub use self::handle::AppHandle;

/// Package metadata source capability.
mod source;
pub use self::source::bundle::MetadataBundle;
pub use self::source::{ApplicationInfo, PackageInfo, PackageLookupError, PackageMetadataSource};

/// Well-known metadata key under which a hosting application may declare a
/// custom UUID for correlating its error and telemetry reports.
///
/// The value under this key is surfaced through
/// [`AppIdentity::custom_uuid`](AppIdentity::custom_uuid).
pub const CUSTOM_UUID_METADATA_KEY: &str = "SPLUNK_OLLY_CUSTOM_UUID";
