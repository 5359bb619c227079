//! Errors raised while reading the sensor segment.
//!
//! These are more detailed than [`TelemetryError`] and are used for
//! logging. They convert to `TelemetryError` for the port API.

use hwtelem_core::TelemetryError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoolantError {
    /// The named segment does not exist, usually because the exporting
    /// tool is not running.
    #[error("Shared-memory segment not found: {0}")]
    SegmentNotFound(String),

    #[error("Access to shared-memory segment denied: {0}")]
    AccessDenied(String),

    /// The segment exists but could not be mapped.
    #[error("Failed to map shared-memory segment: {0}")]
    Map(String),

    /// A read would run past the end of the mapping.
    #[error("Sensor table truncated: needed {needed} bytes, segment has {len}")]
    Truncated { needed: usize, len: usize },

    #[error("Sensor {index} holds a non-finite value ({value})")]
    NonFiniteValue { index: usize, value: f32 },

    /// No record label contains the requested text.
    #[error("No sensor labelled {needle:?} among {scanned} records")]
    SensorNotFound { needle: String, scanned: usize },
}

/// Convert internal errors to the port error.
impl From<CoolantError> for TelemetryError {
    fn from(err: CoolantError) -> Self {
        match err {
            CoolantError::SegmentNotFound(_)
            | CoolantError::Map(_)
            | CoolantError::SensorNotFound { .. } => Self::SourceUnavailable(err.to_string()),
            CoolantError::AccessDenied(_) => Self::PermissionDenied(err.to_string()),
            CoolantError::Truncated { .. } | CoolantError::NonFiniteValue { .. } => {
                Self::MalformedTelemetry(err.to_string())
            }
        }
    }
}

/// Result type for segment operations.
pub type CoolantResult<T> = Result<T, CoolantError>;
