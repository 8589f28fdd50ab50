// crates/engine/src/lib.rs
pub mod chart;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod manifest;
pub mod outcome;
pub mod processor;

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigBuilder};
use crate::error::{EngineError, Result};
use crate::manifest::Manifest;
use crate::outcome::RunResult;

/// Synchronize every configured chart descriptor with the manifest version.
///
/// The manifest is read once, before any chart. Charts are processed in list
/// order. Unless `config.strict` is set, a failing chart is recorded in
/// `RunResult::errors` and the remaining charts are still attempted.
///
/// # Errors
///
/// Returns an error for manifest failures (no chart is touched), and in
/// strict mode for the first chart that fails.
pub fn run(config: &Config) -> Result<RunResult> {
    if config.chart_paths.is_empty() {
        return Err(EngineError::Config(
            "at least one chart path is required".to_string(),
        ));
    }

    let manifest = Manifest::load(&config.manifest_file())?;
    let mut result = RunResult::new(manifest.version.clone());

    for chart_file in config.chart_files() {
        match processor::process_chart(&chart_file, &manifest.version, config.check) {
            Ok(outcome) => {
                if outcome.is_out_of_sync() {
                    log::info!("{}: {outcome}", chart_file.display());
                }
                result.outcomes.push((chart_file, outcome));
            }
            Err(e) if config.strict => return Err(e),
            Err(e) => {
                log::debug!("{}: continuing after error", chart_file.display());
                result.errors.push((chart_file, e));
            }
        }
    }

    Ok(result)
}

/// Write the version found in `manifest_path` into `Chart.yaml` inside each
/// of `chart_paths`, attempting every path even if an earlier one fails.
///
/// # Errors
///
/// See [`run`].
pub fn synchronize(manifest_path: &Path, chart_paths: &[PathBuf]) -> Result<RunResult> {
    let config = ConfigBuilder::default()
        .manifest_path(manifest_path)
        .chart_paths(chart_paths.to_vec())
        .build()
        .map_err(|e| EngineError::Config(e.to_string()))?;
    run(&config)
}
