//! Chart descriptor (`Chart.yaml`) model.
//!
//! The descriptor is kept as an ordered YAML mapping so that every field other
//! than `version` survives a load/render cycle in its original position.
//! Comments and quoting style are not retained by the YAML serializer.

use crate::error::{EngineError, Result};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

const VERSION_KEY: &str = "version";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDescriptor {
    path: PathBuf,
    document: Mapping,
}

impl ChartDescriptor {
    /// Read and parse the descriptor at `path`.
    ///
    /// # Errors
    ///
    /// `ChartRead` if the file cannot be read, otherwise see [`ChartDescriptor::parse`].
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| EngineError::ChartRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    /// Parse descriptor content loaded from `path`.
    ///
    /// # Errors
    ///
    /// `ChartParse` if the content is not YAML, `ChartVersion` if the document
    /// is not a mapping or has no string `version` field.
    pub fn parse(raw: &str, path: &Path) -> Result<Self> {
        let value: Value = serde_yaml::from_str(raw).map_err(|source| EngineError::ChartParse {
            path: path.to_path_buf(),
            source,
        })?;
        let Value::Mapping(document) = value else {
            return Err(EngineError::ChartVersion {
                path: path.to_path_buf(),
                reason: "top-level document is not a mapping".to_string(),
            });
        };

        match document.get(VERSION_KEY) {
            Some(Value::String(_)) => Ok(Self {
                path: path.to_path_buf(),
                document,
            }),
            Some(_) => Err(EngineError::ChartVersion {
                path: path.to_path_buf(),
                reason: "`version` is not a string".to_string(),
            }),
            None => Err(EngineError::ChartVersion {
                path: path.to_path_buf(),
                reason: "missing `version` field".to_string(),
            }),
        }
    }

    #[must_use]
    pub fn version(&self) -> &str {
        self.document
            .get(VERSION_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Overwrite `version` in place, returning the previous value.
    pub fn set_version(&mut self, version: &str) -> String {
        let previous = self.version().to_string();
        // IndexMap-backed: replacing an existing key keeps its position.
        self.document.insert(
            Value::String(VERSION_KEY.to_string()),
            Value::String(version.to_string()),
        );
        previous
    }

    #[cfg(test)]
    fn field(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Serialize the descriptor back to YAML.
    ///
    /// # Errors
    ///
    /// `ChartRender` if serialization fails.
    pub fn render(&self) -> Result<String> {
        serde_yaml::to_string(&self.document).map_err(|source| EngineError::ChartRender {
            path: self.path.clone(),
            source,
        })
    }
}
