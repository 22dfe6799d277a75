//! Pathfinder CLI binary.

use std::process::ExitCode;

use colored::Colorize;
use pathfinder::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // RUST_LOG wins over -v. Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting pathfinder CLI");

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            if e.is_internal() {
                eprintln!(
                    "  {}: this is a bug in pathfinder, please report it with the input file",
                    "note".yellow()
                );
            }
            ExitCode::FAILURE
        }
    }
}
