use crate::error::EngineError;
use std::fmt;
use std::path::PathBuf;

/// What happened to a single chart descriptor during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    /// `version` was rewritten.
    Updated { previous: String, current: String },
    /// `version` already matched; the file was not touched.
    Unchanged { version: String },
    /// Check mode found a stale `version`; nothing was written.
    OutOfSync { found: String, expected: String },
}

impl ChartOutcome {
    #[must_use]
    pub const fn is_out_of_sync(&self) -> bool {
        matches!(self, Self::OutOfSync { .. })
    }
}

impl fmt::Display for ChartOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated { previous, current } => write!(f, "updated {previous} -> {current}"),
            Self::Unchanged { version } => write!(f, "already at {version}"),
            Self::OutOfSync { found, expected } => {
                write!(f, "out of sync: found {found}, expected {expected}")
            }
        }
    }
}

/// Result of a full run over the configured chart list.
#[derive(Debug)]
pub struct RunResult {
    /// Version read from the manifest.
    pub version: String,
    pub outcomes: Vec<(PathBuf, ChartOutcome)>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub const fn new(version: String) -> Self {
        Self {
            version,
            outcomes: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// No chart failed and none is out of sync.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && !self.outcomes.iter().any(|(_, o)| o.is_out_of_sync())
    }

    #[must_use]
    pub fn updated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, ChartOutcome::Updated { .. }))
            .count()
    }
}
