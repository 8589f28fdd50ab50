// crates/cli/src/logging.rs
use crate::args::Args;
use tracing_subscriber::EnvFilter;

/// Log level implied by `-q` / `-v` when `RUST_LOG` is not set.
#[must_use]
pub const fn default_level(args: &Args) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber; `log` records from the engine are bridged into it.
///
/// # Errors
///
/// Fails if a global subscriber or logger is already installed.
pub fn init(args: &Args) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(args)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
    Ok(())
}
