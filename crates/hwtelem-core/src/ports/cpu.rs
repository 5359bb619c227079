//! CPU probe port.

use std::time::Duration;

use super::TelemetryResult;

/// Source of processor utilisation and temperature.
pub trait CpuProbePort: Send + Sync {
    /// Per-logical-core utilisation percentages measured across `window`.
    ///
    /// Blocks the calling thread for the whole window.
    fn sample_core_usage(&self, window: Duration) -> TelemetryResult<Vec<f32>>;

    /// Package temperature in degrees Celsius from the hardware monitor.
    fn temperature(&self) -> TelemetryResult<f32>;
}
