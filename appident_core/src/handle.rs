use crate::PackageMetadataSource;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A handle to the running application: the application’s own package name
/// paired with the [`PackageMetadataSource`] bound to the hosting platform.
///
/// The handle is cheap to clone and is borrowed only for the duration of a
/// [construction attempt](crate::AppIdentity::resolve); the constructed
/// identity retains nothing from it.
#[derive(Clone)]
pub struct AppHandle {
    package_name: Arc<str>,
    source: Arc<dyn PackageMetadataSource>,
}

impl AppHandle {
    /// Creates a new [`AppHandle`] for the given package name over the given
    /// metadata source.
    pub fn new(package_name: impl AsRef<str>, source: Arc<dyn PackageMetadataSource>) -> Self {
        Self {
            package_name: Arc::from(package_name.as_ref()),
            source,
        }
    }

    /// Reports the package name of the running application.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Exposes the package metadata source behind this handle.
    pub fn source(&self) -> &dyn PackageMetadataSource {
        self.source.as_ref()
    }
}

impl Debug for AppHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppHandle")
            .field("package_name", &self.package_name)
            .finish_non_exhaustive()
    }
}
