//! Project manifest (`package.json`) loading.

use crate::error::{EngineError, Result};
use serde::Deserialize;
use std::path::Path;

/// The subset of the project manifest this tool consumes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    pub version: String,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ManifestRead` when the file cannot be read, `ManifestParse`
    /// when it is not JSON or lacks a string `version`, and
    /// `ManifestVersion` when the version is blank.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| EngineError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&raw, path)?;
        log::debug!(
            "manifest {} declares version {}",
            path.display(),
            manifest.version
        );
        Ok(manifest)
    }

    /// Parse manifest content; `path` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// See [`Manifest::load`].
    pub fn parse(raw: &str, path: &Path) -> Result<Self> {
        let manifest: Self =
            serde_json::from_str(raw).map_err(|source| EngineError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;
        if manifest.version.trim().is_empty() {
            return Err(EngineError::ManifestVersion {
                path: path.to_path_buf(),
                reason: "version is empty".to_string(),
            });
        }
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Manifest> {
        Manifest::parse(raw, Path::new("package.json"))
    }

    #[test]
    fn reads_version_and_ignores_other_fields() {
        let manifest = parse(r#"{"name": "hyperdx", "version": "2.3.1", "private": true}"#).unwrap();
        assert_eq!(manifest.version, "2.3.1");
    }

    #[test]
    fn missing_version_is_a_parse_error() {
        let err = parse(r#"{"name": "hyperdx"}"#).unwrap_err();
        assert!(matches!(err, EngineError::ManifestParse { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn non_string_version_is_a_parse_error() {
        let err = parse(r#"{"version": 2}"#).unwrap_err();
        assert!(matches!(err, EngineError::ManifestParse { .. }));
    }

    #[test]
    fn blank_version_is_rejected() {
        let err = parse(r#"{"version": "  "}"#).unwrap_err();
        assert!(matches!(err, EngineError::ManifestVersion { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Manifest::load(Path::new("/nonexistent/package.json")).unwrap_err();
        assert!(matches!(err, EngineError::ManifestRead { .. }));
        assert!(err.to_string().contains("/nonexistent/package.json"));
    }
}
