//! Get command handler.

use std::sync::Arc;

use chrono::Utc;
use hwtelem_core::Section;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::run_blocking;
use crate::presentation::{envelope, render_section};

/// Execute the get command.
///
/// The name goes to the dispatcher unchanged; an unknown section is
/// reported as [`CliError::NotFound`].
pub async fn execute(ctx: &CliContext, name: &str, json: bool) -> Result<(), CliError> {
    let service = Arc::clone(&ctx.service);
    let query = name.to_string();
    let reading = run_blocking(ctx, name, move || service.get(&query))
        .await?
        .ok_or_else(|| CliError::NotFound(name.to_string()))?;
    let section = Section::from_name(name).ok_or_else(|| CliError::NotFound(name.to_string()))?;

    if json {
        let body = envelope(section, Utc::now(), &reading);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render_section(section, &reading));
    }
    Ok(())
}
