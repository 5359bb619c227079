//! All command handler.

use std::sync::Arc;

use chrono::Utc;
use hwtelem_core::{Section, SectionReading};
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::run_blocking;
use crate::presentation::{envelope, render_section};

/// Execute the all command.
///
/// Sections are sampled concurrently, each with its own deadline, and
/// printed in declaration order. A section that fails is skipped with a
/// warning; the first such failure becomes the command's error once the
/// rest have been printed.
pub async fn execute(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    let pending: Vec<_> = Section::all()
        .map(|section| {
            let ctx = ctx.clone();
            (section, tokio::spawn(async move { sample(&ctx, section).await }))
        })
        .collect();

    let mut envelopes = Vec::new();
    let mut first_error = None;
    for (section, handle) in pending {
        match handle.await.map_err(CliError::from).and_then(|result| result) {
            Ok(reading) => {
                if json {
                    envelopes.push(envelope(section, Utc::now(), &reading));
                } else {
                    println!("{}", render_section(section, &reading));
                }
            }
            Err(err) => {
                warn!(%section, error = %err, "section skipped");
                first_error.get_or_insert(err);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&envelopes)?);
    }
    first_error.map_or(Ok(()), Err)
}

async fn sample(ctx: &CliContext, section: Section) -> Result<SectionReading, CliError> {
    let service = Arc::clone(&ctx.service);
    run_blocking(ctx, section.as_str(), move || service.collect(section)).await
}
