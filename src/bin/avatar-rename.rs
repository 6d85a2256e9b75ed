//! Avatar renamer - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use avatar_tools::{
    cli::RenameArgs,
    config::validate_rename_config,
    error::{exit_codes, Result},
    output::{print_error, print_rename_summary},
    rename::run_rename,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = RenameArgs::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load and validate configuration
    let config = args.into_config()?;
    validate_rename_config(&config)?;
    tracing::debug!("Renamer configuration: {:?}", config);

    let outcome = run_rename(&config)?;
    print_rename_summary(&outcome);

    Ok(())
}
