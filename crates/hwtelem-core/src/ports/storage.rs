//! Storage probe port.

use super::TelemetryResult;
use crate::domain::{VolumeMount, VolumeSample};

/// Source of mounted volumes and their usage.
pub trait VolumeProbePort: Send + Sync {
    /// Real mounted volumes, in enumeration order. Pseudo filesystems
    /// (proc, sysfs, tmpfs and the like) are excluded, and each device is
    /// listed once, at its first mount point.
    fn mounts(&self) -> Vec<VolumeMount>;

    /// Usage of the filesystem mounted at `mount.mount_point`.
    ///
    /// A denial by the OS must surface as
    /// [`TelemetryError::PermissionDenied`](super::TelemetryError::PermissionDenied).
    fn usage(&self, mount: &VolumeMount) -> TelemetryResult<VolumeSample>;
}
