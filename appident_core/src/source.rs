use self::bundle::MetadataBundle;
use thiserror::Error;

/// Implements the key-value metadata bundle declared by an application.
pub mod bundle;

/// Capability interface over the host platform’s package registry.
///
/// The registry is consumed through exactly two read-only queries, each of
/// which either succeeds with a structured result or fails with a
/// [not-found](PackageLookupError) condition. Implementations are expected to
/// answer promptly and synchronously: no query here carries a timeout or a
/// cancellation path.
///
/// Abstracting the registry behind this trait keeps the identity-derivation
/// logic of [`AppIdentity`](crate::AppIdentity) testable without a real
/// platform present.
pub trait PackageMetadataSource: Send + Sync {
    /// Resolves the application-level info for the given package name,
    /// including the metadata bundle declared by that application, if any.
    fn application_info(&self, package_name: &str)
        -> Result<ApplicationInfo, PackageLookupError>;

    /// Resolves the install-level info for the given package name, which
    /// carries the numeric version code of the installed build.
    fn package_info(&self, package_name: &str) -> Result<PackageInfo, PackageLookupError>;
}

/// Application-level info resolved from a [`PackageMetadataSource`]: the
/// canonical package name together with the metadata bundle the application
/// declared, if it declared one.
///
/// An [absent](ApplicationInfo::bare) bundle means the application declared
/// no metadata at all. That is a distinguishable condition from a
/// [present-but-empty](MetadataBundle::is_empty) bundle, and the two degrade
/// differently downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationInfo {
    package_name: String,
    metadata: Option<MetadataBundle>,
}

impl ApplicationInfo {
    /// Creates an [`ApplicationInfo`] for an application that declares no
    /// metadata bundle.
    pub fn bare(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            metadata: None,
        }
    }

    /// Creates an [`ApplicationInfo`] for an application that declares the
    /// given metadata bundle (possibly empty).
    pub fn with_metadata(package_name: impl Into<String>, metadata: MetadataBundle) -> Self {
        Self {
            package_name: package_name.into(),
            metadata: Some(metadata),
        }
    }

    /// Reports the canonical package name.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Exposes the declared metadata bundle, if any.
    pub fn metadata(&self) -> Option<&MetadataBundle> {
        self.metadata.as_ref()
    }
}

/// Install-level info resolved from a [`PackageMetadataSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageInfo {
    version_code: u64,
}

impl PackageInfo {
    /// Creates a [`PackageInfo`] with the given numeric version code.
    pub fn new(version_code: u64) -> Self {
        Self { version_code }
    }

    /// Reports the numeric version code of the installed build.
    pub fn version_code(&self) -> u64 {
        self.version_code
    }
}

/// Represents the failure of a [`PackageMetadataSource`] query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackageLookupError {
    /// Indicates that the registry holds no package under the queried name.
    #[error("package '{0}' is not known to the package registry")]
    NameNotFound(String),
}
