//! Output formatting for readings.
//!
//! Format-only: readings arrive fully formatted from the collectors, so
//! nothing here computes or rounds values.

pub mod json;
pub mod tables;

pub use json::envelope;
pub use tables::render_section;
