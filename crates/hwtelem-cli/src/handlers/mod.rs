//! Command handlers.
//!
//! Every collector blocks (the CPU window sleeps, probes touch the OS), so
//! queries run on tokio's blocking pool. The optional deadline is applied
//! here, on the caller side; a timed-out sample keeps running to completion
//! in the background and its result is dropped.

pub mod all;
pub mod config;
pub mod get;
pub mod sections;

use std::time::Duration;

use tokio::task;
use tokio::time;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Run `work` on the blocking pool, bounded by the context's deadline.
pub(crate) async fn run_blocking<T, F>(
    ctx: &CliContext,
    label: &str,
    work: F,
) -> Result<T, CliError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let handle = task::spawn_blocking(work);
    let joined = match ctx.timeout {
        Some(limit) => time::timeout(limit, handle)
            .await
            .map_err(|_| timed_out(label, limit))?,
        None => handle.await,
    };
    Ok(joined?)
}

fn timed_out(label: &str, limit: Duration) -> CliError {
    CliError::Timeout {
        section: label.to_string(),
        secs: limit.as_secs(),
    }
}
