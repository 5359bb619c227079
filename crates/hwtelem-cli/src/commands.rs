//! Subcommand definitions.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read one section (cpu, gpu, ram, storage, coolant)
    Get {
        /// Section name, case-insensitive
        section: String,
        /// Print a JSON envelope instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Read every section concurrently
    All {
        /// Print a JSON array of envelopes instead of tables
        #[arg(long)]
        json: bool,
    },
    /// List the section names `get` accepts
    Sections,
    /// Show the effective settings
    Config,
}
