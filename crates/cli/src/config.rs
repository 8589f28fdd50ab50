// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use chart_sync_engine::config::{Config, ConfigBuilder};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        // Manifest and chart locations are compiled in; only run mode comes from flags.
        ConfigBuilder::default()
            .strict(args.strict)
            .check(args.check)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
