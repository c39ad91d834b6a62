use crate::{AppHandle, ApplicationInfo, PackageLookupError, CUSTOM_UUID_METADATA_KEY};
use parking_lot::Mutex;
use std::sync::OnceLock;
use tracing::error;

// Global singleton cell holding the identity of the hosting application
static IDENTITY: OnceLock<AppIdentity> = OnceLock::new();

// Guard serializing first-time construction attempts. The cell alone is not
// enough: a failed attempt must leave the cell unset so that a later call can
// retry, which rules out `OnceLock::get_or_init`.
static ATTEMPT: Mutex<()> = Mutex::new(());

/// Facade holding the identifiers of the hosting application, captured once
/// per process from a [`PackageMetadataSource`](crate::PackageMetadataSource).
///
/// The three identifiers — [application ID](AppIdentity::application_id),
/// [version code](AppIdentity::version_code), and
/// [custom UUID](AppIdentity::custom_uuid) — are derived during a single
/// [construction attempt](AppIdentity::resolve) and never change afterwards.
///
/// Only a failure to resolve the application’s own package aborts
/// construction; the version code and the custom UUID degrade individually to
/// “no value” instead. No failure is ever surfaced to the accessors: callers
/// observe either an absent provider or absent individual values.
///
/// ## Usage
///
/// ```ignore
/// if let Some(identity) = AppIdentity::resolve(&handle) {
///     report.set_application_id(identity.application_id());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    application_id: String,
    version_code: Option<String>,
    custom_uuid: Option<String>,
}

impl AppIdentity {
    /// Returns the process-wide [`AppIdentity`], constructing it on the first
    /// call.
    ///
    /// At most one construction attempt runs at a time, and exactly one
    /// successful attempt is memoized for the lifetime of the process: all
    /// racing first-time callers observe the same outcome. Once constructed,
    /// repeated calls return the memoized instance without re-querying the
    /// metadata source.
    ///
    /// If the attempt [fails](AppIdentity::extract), the failure is reported
    /// via `tracing`, [`None`] is returned, and the singleton remains unset:
    /// the next call retries construction from scratch with fresh queries.
    pub fn resolve(handle: &AppHandle) -> Option<&'static AppIdentity> {
        // Fast path: already constructed
        if let Some(identity) = IDENTITY.get() {
            return Some(identity);
        }

        // Serialize competing first-time callers
        let _attempt = ATTEMPT.lock();

        // Another caller may have won the race while this one waited
        if let Some(identity) = IDENTITY.get() {
            return Some(identity);
        }

        match Self::extract(handle) {
            Ok(identity) => {
                let _ = IDENTITY.set(identity);

                IDENTITY.get()
            }
            Err(error) => {
                error!(%error, "Failed to extract the application identity");

                None
            }
        }
    }

    /// Returns the process-wide [`AppIdentity`], if a construction attempt
    /// has already succeeded.
    ///
    /// This method never triggers construction: use
    /// [`resolve`](AppIdentity::resolve) for that.
    pub fn current() -> Option<&'static AppIdentity> {
        IDENTITY.get()
    }

    /// Performs the metadata-source queries and assembles a fresh
    /// [`AppIdentity`], outside of any singleton machinery.
    ///
    /// Fails only when the application’s own package cannot be resolved. The
    /// secondary lookups degrade individually: a failed version-code query
    /// and an absent metadata bundle each leave their field at [`None`] and
    /// emit a diagnostic, while a present bundle that merely lacks the
    /// [well-known key](CUSTOM_UUID_METADATA_KEY) degrades silently.
    pub fn extract(handle: &AppHandle) -> Result<Self, PackageLookupError> {
        let info = handle.source().application_info(handle.package_name())?;

        Ok(Self {
            application_id: info.package_name().to_owned(),
            version_code: Self::retrieve_version_code(handle),
            custom_uuid: Self::retrieve_custom_uuid(&info),
        })
    }

    /// Queries the install-level package info and stringifies its version
    /// code. A not-found outcome degrades to [`None`].
    fn retrieve_version_code(handle: &AppHandle) -> Option<String> {
        match handle.source().package_info(handle.package_name()) {
            Ok(package_info) => Some(package_info.version_code().to_string()),
            Err(error) => {
                error!(%error, "Failed to look up the application version code");

                None
            }
        }
    }

    /// Reads the [well-known key](CUSTOM_UUID_METADATA_KEY) from the declared
    /// metadata bundle. An entirely absent bundle degrades to [`None`] with a
    /// diagnostic; a missing key in a present bundle degrades silently.
    fn retrieve_custom_uuid(info: &ApplicationInfo) -> Option<String> {
        match info.metadata() {
            Some(bundle) => bundle.get(CUSTOM_UUID_METADATA_KEY).map(str::to_owned),
            None => {
                error!("Application declares no metadata bundle");

                None
            }
        }
    }
}

impl AppIdentity {
    /// Reports the package identifier of the hosting application.
    ///
    /// Always present: a construction attempt that cannot resolve the package
    /// name produces no [`AppIdentity`] at all.
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// Reports the stringified numeric version code of the installed build,
    /// or [`None`] if the version lookup failed at construction time.
    pub fn version_code(&self) -> Option<&str> {
        self.version_code.as_deref()
    }

    /// Reports the custom UUID declared by the hosting application under the
    /// [well-known key](CUSTOM_UUID_METADATA_KEY), or [`None`] if no such
    /// declaration was found at construction time.
    pub fn custom_uuid(&self) -> Option<&str> {
        self.custom_uuid.as_deref()
    }
}
