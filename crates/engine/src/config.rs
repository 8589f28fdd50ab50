use derive_builder::Builder;
use std::path::{Path, PathBuf};

/// Chart directories kept in step with the package version.
pub const DEFAULT_CHART_PATHS: &[&str] = &["./charts/hdx-oss-v2"];

/// Project manifest that owns the canonical version.
pub const DEFAULT_MANIFEST_PATH: &str = "package.json";

/// Descriptor file expected inside every chart directory.
pub const CHART_FILE_NAME: &str = "Chart.yaml";

fn default_chart_paths() -> Vec<PathBuf> {
    DEFAULT_CHART_PATHS.iter().map(PathBuf::from).collect()
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// Directory that relative manifest and chart paths are resolved against.
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "PathBuf::from(DEFAULT_MANIFEST_PATH)")]
    pub manifest_path: PathBuf,
    #[builder(default = "default_chart_paths()")]
    pub chart_paths: Vec<PathBuf>,
    #[builder(default = "CHART_FILE_NAME.to_string()")]
    pub chart_file_name: String,

    /// Stop at the first chart that fails instead of attempting the rest.
    #[builder(default)]
    pub strict: bool,
    /// Report drift without writing anything.
    #[builder(default)]
    pub check: bool,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(paths) = &self.chart_paths
            && paths.is_empty()
        {
            return Err("at least one chart path is required".to_string());
        }
        if let Some(name) = &self.chart_file_name
            && name.trim().is_empty()
        {
            return Err("chart file name must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            chart_paths: default_chart_paths(),
            chart_file_name: CHART_FILE_NAME.to_string(),
            strict: false,
            check: false,
        }
    }
}

impl Config {
    /// Manifest location resolved against `root`.
    #[must_use]
    pub fn manifest_file(&self) -> PathBuf {
        self.root.join(&self.manifest_path)
    }

    /// Descriptor location for a single chart directory.
    #[must_use]
    pub fn chart_file(&self, chart_dir: &Path) -> PathBuf {
        self.root.join(chart_dir).join(&self.chart_file_name)
    }

    /// Descriptor locations for every configured chart, in order.
    #[must_use]
    pub fn chart_files(&self) -> Vec<PathBuf> {
        self.chart_paths
            .iter()
            .map(|dir| self.chart_file(dir))
            .collect()
    }
}
