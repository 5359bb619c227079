//! Raw numeric samples produced by probe ports.
//!
//! These are the unformatted inputs collectors turn into [`Reading`]s.
//!
//! [`Reading`]: super::Reading

use std::path::PathBuf;

/// Point-in-time memory statistics in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemorySample {
    pub total_bytes: u64,
    pub used_bytes: u64,
    /// Memory that can be handed to new allocations without swapping.
    pub available_bytes: u64,
}

/// Temperature and load of a single GPU, as reported by the vendor driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuSample {
    pub temperature_c: u32,
    pub utilization_pct: u32,
}

/// A real (non-pseudo) mounted volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeMount {
    /// Device identifier, e.g. `/dev/nvme0n1p2` or `C:\`.
    pub device: String,
    pub mount_point: PathBuf,
}

impl VolumeMount {
    pub fn new(device: impl Into<String>, mount_point: impl Into<PathBuf>) -> Self {
        Self {
            device: device.into(),
            mount_point: mount_point.into(),
        }
    }
}

/// Usage of one filesystem in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VolumeSample {
    pub total_bytes: u64,
    pub used_bytes: u64,
    /// Space available to unprivileged users.
    pub available_bytes: u64,
}
