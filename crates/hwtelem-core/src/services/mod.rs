//! Services built on top of the collectors.

mod telemetry;

pub use telemetry::TelemetryService;
