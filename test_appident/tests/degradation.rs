#[cfg(test)]
mod tests {
    use appident::{AppHandle, AppIdentity, CUSTOM_UUID_METADATA_KEY};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use test_util::{CountingRegistry, MemoryRegistry};

    const PACKAGE: &str = "com.example.app";

    fn handle_over(registry: MemoryRegistry) -> AppHandle {
        AppHandle::new(PACKAGE, Arc::new(registry))
    }

    #[test]
    fn version_lookup_degrades_alone() {
        // Given: application info resolvable, install info not
        let registry = MemoryRegistry::new()
            .package(PACKAGE, 42)
            .without_version(PACKAGE)
            .metadata(PACKAGE, CUSTOM_UUID_METADATA_KEY, "abc-123");

        // When
        let identity = AppIdentity::extract(&handle_over(registry)).unwrap();

        // Then
        assert_eq!(identity.application_id(), PACKAGE);
        assert_eq!(identity.version_code(), None);
        assert_eq!(identity.custom_uuid(), Some("abc-123"));
    }

    #[test]
    fn absent_bundle_degrades_uuid() {
        // Given: no metadata bundle declared at all
        let registry = MemoryRegistry::new().package(PACKAGE, 42);

        // When
        let identity = AppIdentity::extract(&handle_over(registry)).unwrap();

        // Then
        assert_eq!(identity.version_code(), Some("42"));
        assert_eq!(identity.custom_uuid(), None);
    }

    #[test]
    fn missing_key_degrades_uuid() {
        // Given: a declared bundle that lacks the well-known key
        let registry = MemoryRegistry::new()
            .package(PACKAGE, 42)
            .metadata(PACKAGE, "UNRELATED_KEY", "whatever");

        // When
        let identity = AppIdentity::extract(&handle_over(registry)).unwrap();

        // Then
        assert_eq!(identity.custom_uuid(), None);
    }

    #[test]
    fn empty_bundle_degrades_uuid() {
        // Given: a declared, empty bundle
        let registry = MemoryRegistry::new()
            .package(PACKAGE, 42)
            .metadata_bundle(PACKAGE);

        // When
        let identity = AppIdentity::extract(&handle_over(registry)).unwrap();

        // Then
        assert_eq!(identity.custom_uuid(), None);
    }

    #[test]
    fn extraction_queries_each_lookup_once() {
        // Given
        let registry = Arc::new(CountingRegistry::new(
            MemoryRegistry::new().package(PACKAGE, 42),
        ));
        let handle = AppHandle::new(PACKAGE, registry.clone());

        // When
        let _identity = AppIdentity::extract(&handle).unwrap();

        // Then: no built-in retries within a single construction attempt
        assert_eq!(registry.application_info_queries(), 1);
        assert_eq!(registry.package_info_queries(), 1);
    }
}
