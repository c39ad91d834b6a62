#[cfg(test)]
mod tests {
    use appident_manifest::{ManifestError, ManifestRegistry};
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn loads_from_file() {
        // Given
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packages.yaml");

        fs::write(
            &path,
            r#"
packages:
  - package: com.example.app
    version_code: 42
"#,
        )
        .unwrap();

        // When
        let registry = ManifestRegistry::from_file(&path).unwrap();

        // Then
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("com.example.app"));
    }

    #[test]
    fn reports_unreadable_file() {
        // Given
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.yaml");

        // When
        let outcome = ManifestRegistry::from_file(&path);

        // Then
        assert!(matches!(
            outcome,
            Err(ManifestError::UnreadableFile { path: reported, .. }) if reported == path,
        ));
    }
}
