//! Avatar manifest generator - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use avatar_tools::{
    cli::ManifestArgs,
    config::validate_manifest_config,
    error::{exit_codes, Result},
    manifest::run_manifest,
    output::{print_error, print_success},
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
    let args = ManifestArgs::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    let config = args.into_config()?;
    validate_manifest_config(&config)?;

    let manifest = run_manifest(&config)?;
    print_success(&format!(
        "Wrote {} with {} avatars.",
        config.output.display(),
        manifest.count
    ));

    Ok(())
}
