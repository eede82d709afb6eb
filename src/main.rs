//! CLI entry point.
//!
//! Parses arguments, initializes tracing from the `-v` count, and dispatches
//! to the command handlers. Fatal errors (e.g. an unwritable report
//! destination) are logged and mapped to exit code 1; per-file analysis
//! failures never reach this path.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use swapscan::cli::{Cli, Commands};
use swapscan::commands::{run_check, run_events, run_scan};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Scan(args) => run_scan(args, cli.json),
        Commands::Check(args) => run_check(args, cli.json),
        Commands::Events(args) => run_events(args, cli.json),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
