use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use precinct::cli::{Arguments, ExitStatus};
use tracing_subscriber::EnvFilter;

/// Overrides the `--verbose` log level when set.
const LOG_ENV: &str = "PRECINCT_LOG";

fn main() -> ExitCode {
    let args = Arguments::parse();

    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) if args.verbose => EnvFilter::new("debug"),
        Err(_) => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match precinct::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitStatus::Error.into()
        }
    }
}
