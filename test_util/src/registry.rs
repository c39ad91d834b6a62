use appident_core::{
    ApplicationInfo, MetadataBundle, PackageInfo, PackageLookupError, PackageMetadataSource,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An in-memory [`PackageMetadataSource`] with a builder-style API, for
/// scripting arbitrary registry states in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    packages: HashMap<String, MemoryPackage>,
}

#[derive(Debug, Clone, Default)]
struct MemoryPackage {
    version_code: Option<u64>,
    metadata: Option<MetadataBundle>,
}

impl MemoryRegistry {
    /// Creates an empty [`MemoryRegistry`]: every query fails with the
    /// not-found condition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a package with the given version code and no metadata
    /// bundle.
    pub fn package(mut self, name: &str, version_code: u64) -> Self {
        self.entry(name).version_code = Some(version_code);
        self
    }

    /// Drops the install-level info of a registered package, so that the
    /// package-info query fails while the application-info query still
    /// succeeds.
    pub fn without_version(mut self, name: &str) -> Self {
        self.entry(name).version_code = None;
        self
    }

    /// Declares a (possibly empty) metadata bundle on a registered package.
    pub fn metadata_bundle(mut self, name: &str) -> Self {
        let entry = self.entry(name);
        entry.metadata.get_or_insert_with(MetadataBundle::new);
        self
    }

    /// Adds a metadata entry to a registered package, declaring the bundle if
    /// it is not declared yet.
    pub fn metadata(mut self, name: &str, key: &str, value: &str) -> Self {
        let entry = self.entry(name);
        let bundle = entry.metadata.take().unwrap_or_default();
        entry.metadata = Some(bundle.with(key, value));
        self
    }

    fn entry(&mut self, name: &str) -> &mut MemoryPackage {
        self.packages.entry(name.to_owned()).or_default()
    }

    fn lookup(&self, package_name: &str) -> Result<&MemoryPackage, PackageLookupError> {
        self.packages
            .get(package_name)
            .ok_or_else(|| PackageLookupError::NameNotFound(package_name.to_owned()))
    }
}

impl PackageMetadataSource for MemoryRegistry {
    fn application_info(&self, package_name: &str) -> Result<ApplicationInfo, PackageLookupError> {
        let package = self.lookup(package_name)?;

        Ok(match &package.metadata {
            Some(bundle) => ApplicationInfo::with_metadata(package_name, bundle.clone()),
            None => ApplicationInfo::bare(package_name),
        })
    }

    fn package_info(&self, package_name: &str) -> Result<PackageInfo, PackageLookupError> {
        let package = self.lookup(package_name)?;

        package
            .version_code
            .map(PackageInfo::new)
            .ok_or_else(|| PackageLookupError::NameNotFound(package_name.to_owned()))
    }
}

/// A [`PackageMetadataSource`] wrapper that counts the queries flowing into
/// the inner source, successful or not.
#[derive(Debug, Default)]
pub struct CountingRegistry<S> {
    inner: S,
    application_info_queries: AtomicUsize,
    package_info_queries: AtomicUsize,
}

impl<S> CountingRegistry<S> {
    /// Wraps the given source.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            application_info_queries: AtomicUsize::new(0),
            package_info_queries: AtomicUsize::new(0),
        }
    }

    /// Reports how many application-info queries have flowed through.
    pub fn application_info_queries(&self) -> usize {
        self.application_info_queries.load(Ordering::SeqCst)
    }

    /// Reports how many package-info queries have flowed through.
    pub fn package_info_queries(&self) -> usize {
        self.package_info_queries.load(Ordering::SeqCst)
    }
}

impl<S> PackageMetadataSource for CountingRegistry<S>
where
    S: PackageMetadataSource,
{
    fn application_info(&self, package_name: &str) -> Result<ApplicationInfo, PackageLookupError> {
        self.application_info_queries.fetch_add(1, Ordering::SeqCst);

        self.inner.application_info(package_name)
    }

    fn package_info(&self, package_name: &str) -> Result<PackageInfo, PackageLookupError> {
        self.package_info_queries.fetch_add(1, Ordering::SeqCst);

        self.inner.package_info(package_name)
    }
}
