//! GPU probe port.

use super::TelemetryResult;
use crate::domain::GpuSample;

/// Vendor-driver binding for one GPU.
///
/// Implementations must treat the whole chain (driver init, device
/// handle, both reads) as a single operation: either every field is
/// returned or an error is.
pub trait GpuProbePort: Send + Sync {
    fn sample(&self, device_index: u32) -> TelemetryResult<GpuSample>;
}
