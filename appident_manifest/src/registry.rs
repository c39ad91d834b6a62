use crate::document::{ManifestDocument, PackageEntry};
use appident_core::{
    ApplicationInfo, MetadataBundle, PackageInfo, PackageLookupError, PackageMetadataSource,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A [`PackageMetadataSource`] backed by a YAML manifest document.
///
/// The registry is loaded once, [from a string](ManifestRegistry::from_yaml)
/// or [from a file](ManifestRegistry::from_file), and answers queries from
/// memory thereafter. A package name that does not occur in the manifest
/// yields the not-found condition on both queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestRegistry {
    packages: HashMap<String, ManifestPackage>,
}

/// A single installed package as recorded in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ManifestPackage {
    version_code: u64,
    metadata: Option<MetadataBundle>,
}

impl ManifestRegistry {
    /// Loads a [`ManifestRegistry`] from the manifest file at the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|source| ManifestError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&text)
    }

    /// Loads a [`ManifestRegistry`] from the given YAML manifest text.
    pub fn from_yaml(text: &str) -> Result<Self, ManifestError> {
        let document: ManifestDocument = serde_yml::from_str(text)?;

        Self::from_document(document)
    }

    /// Indexes the parsed document by package name, rejecting duplicates.
    fn from_document(document: ManifestDocument) -> Result<Self, ManifestError> {
        let mut packages = HashMap::with_capacity(document.packages.len());

        for entry in document.packages {
            let PackageEntry {
                package,
                version_code,
                metadata,
            } = entry;

            let record = ManifestPackage {
                version_code,
                metadata: metadata.map(|entries| entries.into_iter().collect()),
            };

            if packages.insert(package.clone(), record).is_some() {
                return Err(ManifestError::DuplicatePackage(package));
            }
        }

        Ok(Self { packages })
    }
}

impl ManifestRegistry {
    /// Reports the number of packages recorded in this manifest.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Reports whether this manifest records no packages.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Reports whether this manifest records a package under the given name.
    pub fn contains(&self, package_name: &str) -> bool {
        self.packages.contains_key(package_name)
    }

    /// Looks up a recorded package, mapping absence to the not-found
    /// condition.
    fn lookup(&self, package_name: &str) -> Result<&ManifestPackage, PackageLookupError> {
        self.packages
            .get(package_name)
            .ok_or_else(|| PackageLookupError::NameNotFound(package_name.to_owned()))
    }
}

impl PackageMetadataSource for ManifestRegistry {
    fn application_info(&self, package_name: &str) -> Result<ApplicationInfo, PackageLookupError> {
        let package = self.lookup(package_name)?;

        Ok(match &package.metadata {
            Some(bundle) => ApplicationInfo::with_metadata(package_name, bundle.clone()),
            None => ApplicationInfo::bare(package_name),
        })
    }

    fn package_info(&self, package_name: &str) -> Result<PackageInfo, PackageLookupError> {
        let package = self.lookup(package_name)?;

        Ok(PackageInfo::new(package.version_code))
    }
}

/// Represents the various error states that may arise while loading a
/// manifest document.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Indicates that the manifest file could not be read.
    #[error("failed to read the manifest file at '{path}'")]
    UnreadableFile {
        /// Path to the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Indicates that the manifest text is not a well-formed document.
    #[error("failed to parse the manifest document")]
    MalformedDocument(#[from] serde_yml::Error),

    /// Indicates that the manifest declares the same package more than once.
    #[error("manifest declares package '{0}' more than once")]
    DuplicatePackage(String),
}
