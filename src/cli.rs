use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Name of the report written when `--report` is not given.
pub const DEFAULT_REPORT_NAME: &str = "analysis_report.csv";

#[derive(Parser, Debug)]
#[command(name = "swapscan", version, about = "Owner swap log conformance scanner")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,

    /// Increase log verbosity. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory tree for .log files and write a CSV report.
    Scan(ScanArgs),

    /// Classify a single log file and print its verdict.
    Check(CheckArgs),

    /// Dump the protocol events extracted from a single log file.
    Events(EventsArgs),
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Root directory searched recursively for .log files.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Report destination. Defaults to analysis_report.csv under the root.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Log file to classify.
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct EventsArgs {
    /// Log file to extract events from.
    pub file: PathBuf,
}
