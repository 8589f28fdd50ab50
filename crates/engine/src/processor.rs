use crate::chart::ChartDescriptor;
use crate::error::{EngineError, Result};
use crate::filesystem::atomic_write;
use crate::outcome::ChartOutcome;
use std::path::Path;

/// Bring the descriptor at `chart_file` to `version`.
///
/// The file is only rewritten when its `version` differs. In `check` mode the
/// file is never written and a stale version yields `OutOfSync`.
///
/// # Errors
///
/// Any read, parse, render or write failure for this descriptor. The file on
/// disk is unchanged whenever an error is returned.
pub fn process_chart(chart_file: &Path, version: &str, check: bool) -> Result<ChartOutcome> {
    log::debug!("reading chart {}", chart_file.display());
    let mut chart = ChartDescriptor::load(chart_file)?;

    if chart.version() == version {
        return Ok(ChartOutcome::Unchanged {
            version: version.to_string(),
        });
    }

    if check {
        return Ok(ChartOutcome::OutOfSync {
            found: chart.version().to_string(),
            expected: version.to_string(),
        });
    }

    let previous = chart.set_version(version);
    let rendered = chart.render()?;
    atomic_write(chart_file, rendered.as_bytes()).map_err(|source| EngineError::ChartWrite {
        path: chart_file.to_path_buf(),
        source,
    })?;

    log::info!(
        "{}: version {previous} -> {version}",
        chart_file.display()
    );
    Ok(ChartOutcome::Updated {
        previous,
        current: version.to_string(),
    })
}
