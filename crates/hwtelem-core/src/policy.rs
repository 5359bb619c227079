//! Degradation policy.
//!
//! A source that cannot be read is reported with fixed sentinel text
//! instead of an error. Every collector routes failures through here so the
//! text is identical no matter which source failed or how often.

use tracing::debug;

use crate::ports::TelemetryError;

/// Substitute for any metric that could not be obtained.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Per-device marker for a volume the OS refused to stat.
pub const PERMISSION_DENIED: &str = "Permission Denied";

/// Format a probe result, or fall back to [`NOT_AVAILABLE`].
///
/// The failure cause is logged at debug level under `source`.
pub fn or_not_available<T>(
    source: &str,
    result: Result<T, TelemetryError>,
    format: impl FnOnce(T) -> String,
) -> String {
    match result {
        Ok(value) => format(value),
        Err(err) => {
            log_degraded(source, &err);
            NOT_AVAILABLE.to_string()
        }
    }
}

/// Record why a source degraded to a sentinel.
pub fn log_degraded(source: &str, err: &TelemetryError) {
    debug!(source, error = %err, "source degraded to sentinel");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_not_available_formats_success() {
        let text = or_not_available("test", Ok(21_u32), |v| format!("{v}°C"));
        assert_eq!(text, "21°C");
    }

    #[test]
    fn test_failures_map_to_identical_text() {
        let errors = [
            TelemetryError::unavailable("driver missing"),
            TelemetryError::denied("nope"),
            TelemetryError::malformed("bad count"),
        ];
        for err in errors {
            let text = or_not_available("test", Err::<u32, _>(err), |v| v.to_string());
            assert_eq!(text, NOT_AVAILABLE);
        }
    }
}
