//! Manifest file reading and writing
//!
//! Whole-file reads and writes with the path attached to any I/O error.

use crate::error::ManifestError;
use std::fs;
use std::path::Path;

/// Read a manifest file content safely
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

/// Write content to a manifest file
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("composer.json");
        let content = r#"{"name": "roots/bedrock"}"#;
        fs::write(&path, content).unwrap();

        let result = read_manifest(&path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_manifest_not_found() {
        let result = read_manifest(Path::new("/nonexistent/path/composer.json"));
        assert!(matches!(result, Err(ManifestError::ReadError { .. })));
    }

    #[test]
    fn test_write_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("composer.json");
        let content = r#"{"name": "roots/bedrock"}"#;

        write_manifest(&path, content).unwrap();

        let result = fs::read_to_string(&path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_write_manifest_missing_directory() {
        let result = write_manifest(Path::new("/nonexistent/path/composer.json"), "{}");
        assert!(matches!(result, Err(ManifestError::WriteError { .. })));
    }
}
