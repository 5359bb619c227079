//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Read CPU, GPU, memory, storage and coolant telemetry from this host.
#[derive(Parser)]
#[command(name = "hwtelem")]
#[command(about = "Single-host hardware telemetry")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Give up on a section after this many seconds
    #[arg(long = "timeout-secs", global = true, env = "HWTELEM_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
