//! CLI-specific error types and exit codes.

use hwtelem_core::SettingsError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested section does not exist.
    #[error("Invalid section: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A section did not answer within `--timeout-secs`.
    #[error("Timed out after {secs}s reading {section}")]
    Timeout { section: String, secs: u64 },

    #[error("IO error: {0}")]
    Io(String),

    /// A blocking task panicked or was cancelled.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    /// Map error to an exit code from sysexits.h.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Timeout { .. } => 75, // EX_TEMPFAIL
            Self::Io(_) => 74,       // EX_IOERR
            Self::Runtime(_) => 70,  // EX_SOFTWARE
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<tokio::task::JoinError> for CliError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Runtime(err.to_string())
    }
}
