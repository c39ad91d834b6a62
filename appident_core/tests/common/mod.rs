use appident_core::{
    ApplicationInfo, MetadataBundle, PackageInfo, PackageLookupError, PackageMetadataSource,
    CUSTOM_UUID_METADATA_KEY,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Helper registry for testing [`AppIdentity`](appident_core::AppIdentity):
/// holds at most one installed package and counts the primary
/// (application-info) queries it receives.
pub struct RegistryTestVehicle {
    package: Option<InstalledPackage>,
    primary_queries: AtomicUsize,
}

struct InstalledPackage {
    name: String,
    version_code: u64,
    custom_uuid: Option<String>,
}

#[allow(dead_code)]
impl RegistryTestVehicle {
    /// Initializes a vehicle with no installed packages: every query fails
    /// with the not-found condition.
    pub fn empty() -> Self {
        Self {
            package: None,
            primary_queries: AtomicUsize::new(0),
        }
    }

    /// Initializes a vehicle with a single installed package. A [`Some`]
    /// custom UUID is declared under the well-known metadata key; [`None`]
    /// declares a bundle without that key.
    pub fn with_package(name: &str, version_code: u64, custom_uuid: Option<&str>) -> Self {
        Self {
            package: Some(InstalledPackage {
                name: name.to_owned(),
                version_code,
                custom_uuid: custom_uuid.map(str::to_owned),
            }),
            primary_queries: AtomicUsize::new(0),
        }
    }

    /// Reports how many application-info queries this vehicle has answered,
    /// successfully or not.
    pub fn primary_queries(&self) -> usize {
        self.primary_queries.load(Ordering::SeqCst)
    }
}

impl PackageMetadataSource for RegistryTestVehicle {
    fn application_info(&self, package_name: &str) -> Result<ApplicationInfo, PackageLookupError> {
        self.primary_queries.fetch_add(1, Ordering::SeqCst);

        match &self.package {
            Some(package) if package.name == package_name => {
                let mut bundle = MetadataBundle::new();

                if let Some(custom_uuid) = &package.custom_uuid {
                    bundle = bundle.with(CUSTOM_UUID_METADATA_KEY, custom_uuid);
                }

                Ok(ApplicationInfo::with_metadata(&package.name, bundle))
            }
            _ => Err(PackageLookupError::NameNotFound(package_name.to_owned())),
        }
    }

    fn package_info(&self, package_name: &str) -> Result<PackageInfo, PackageLookupError> {
        match &self.package {
            Some(package) if package.name == package_name => {
                Ok(PackageInfo::new(package.version_code))
            }
            _ => Err(PackageLookupError::NameNotFound(package_name.to_owned())),
        }
    }
}
