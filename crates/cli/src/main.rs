use chart_sync_cli::args::Args;
use chart_sync_cli::config::Config;
use chart_sync_cli::{logging, presentation};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logging::init(&args) {
        eprintln!("Logging Error: {e}");
    }
    let quiet = args.quiet;

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match chart_sync_engine::run(&config) {
        Ok(result) => {
            for (path, err) in &result.errors {
                eprintln!("Error processing {}: {err}", path.display());
            }
            if !quiet {
                presentation::print_results(&result, &config);
            }

            if result.is_success() {
                ExitCode::SUCCESS
            } else {
                log::debug!("run finished with failures or drift");
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
