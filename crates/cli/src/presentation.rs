// crates/cli/src/presentation.rs
use crate::config::Config;
use chart_sync_engine::outcome::{ChartOutcome, RunResult};
use std::fmt::Write;

pub fn print_results(result: &RunResult, config: &Config) {
    print!("{}", render_report(result, config));
}

/// Human-readable summary of a run, one line per chart.
#[must_use]
pub fn render_report(result: &RunResult, config: &Config) -> String {
    let mut out = String::new();
    let mode = if config.check { "check" } else { "sync" };
    let _ = writeln!(
        out,
        "chart_sync v{} · {mode} · version {}",
        crate::VERSION,
        result.version
    );

    for (path, outcome) in &result.outcomes {
        let label = match outcome {
            ChartOutcome::Updated { .. } => "updated",
            ChartOutcome::Unchanged { .. } => "ok",
            ChartOutcome::OutOfSync { .. } => "stale",
        };
        let _ = writeln!(out, "  {label:<8} {} ({outcome})", path.display());
    }
    for (path, _) in &result.errors {
        let _ = writeln!(out, "  {:<8} {}", "failed", path.display());
    }

    let _ = writeln!(
        out,
        "{} updated, {} failed, {} total",
        result.updated(),
        result.errors.len(),
        result.outcomes.len() + result.errors.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_sync_engine::error::EngineError;
    use std::path::PathBuf;

    #[test]
    fn report_lists_every_chart() {
        let mut result = RunResult::new("2.3.1".into());
        result.outcomes.push((
            PathBuf::from("charts/a/Chart.yaml"),
            ChartOutcome::Updated {
                previous: "2.0.0".into(),
                current: "2.3.1".into(),
            },
        ));
        result.errors.push((
            PathBuf::from("charts/b/Chart.yaml"),
            EngineError::Config("boom".into()),
        ));

        let report = render_report(&result, &Config::default());

        assert!(report.contains("sync · version 2.3.1"));
        assert!(report.contains("updated  charts/a/Chart.yaml (updated 2.0.0 -> 2.3.1)"));
        assert!(report.contains("failed   charts/b/Chart.yaml"));
        assert!(report.ends_with("1 updated, 1 failed, 2 total\n"));
    }
}
