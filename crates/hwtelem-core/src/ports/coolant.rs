//! Coolant probe port.

use super::TelemetryResult;

/// Source of the liquid-coolant loop temperature.
pub trait CoolantProbePort: Send + Sync {
    /// Coolant temperature in degrees Celsius.
    fn coolant_temperature(&self) -> TelemetryResult<f32>;
}
