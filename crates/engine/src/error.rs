use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest '{path}': {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid version in manifest '{path}': {reason}")]
    ManifestVersion { path: PathBuf, reason: String },

    #[error("Failed to read chart '{path}': {source}")]
    ChartRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse chart '{path}': {source}")]
    ChartParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid chart '{path}': {reason}")]
    ChartVersion { path: PathBuf, reason: String },

    #[error("Failed to serialize chart '{path}': {source}")]
    ChartRender {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write chart '{path}': {source}")]
    ChartWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Whether this error prevents any chart from being processed.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ManifestRead { .. }
                | Self::ManifestParse { .. }
                | Self::ManifestVersion { .. }
                | Self::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
