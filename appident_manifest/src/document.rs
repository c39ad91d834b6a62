use serde::Deserialize;
use std::collections::HashMap;

/// Deserialization shape of a whole manifest document.
#[derive(Debug, Deserialize)]
pub(crate) struct ManifestDocument {
    #[serde(default)]
    pub(crate) packages: Vec<PackageEntry>,
}

/// Deserialization shape of a single installed-package entry.
///
/// The `metadata` key is genuinely optional: leaving it out declares no
/// metadata bundle at all, while `metadata: {}` declares a present-but-empty
/// bundle.
#[derive(Debug, Deserialize)]
pub(crate) struct PackageEntry {
    pub(crate) package: String,
    pub(crate) version_code: u64,
    pub(crate) metadata: Option<HashMap<String, String>>,
}
