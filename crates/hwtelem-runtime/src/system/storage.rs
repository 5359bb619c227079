//! Mounted volumes and their usage.
//!
//! Volumes are enumerated with sysinfo. On Unix the usage of each mount is
//! read with `statvfs` so that an `EACCES` on one mount point surfaces as a
//! per-device permission failure; elsewhere sysinfo's own figures are used.

use std::collections::HashSet;
use std::path::Path;

use hwtelem_core::{TelemetryError, TelemetryResult, VolumeMount, VolumeProbePort, VolumeSample};
use sysinfo::{Disk, Disks};

/// Filesystem types that never back real storage.
const PSEUDO_FILESYSTEMS: [&str; 14] = [
    "autofs",
    "binfmt_misc",
    "cgroup",
    "cgroup2",
    "configfs",
    "debugfs",
    "devpts",
    "devtmpfs",
    "fusectl",
    "overlay",
    "proc",
    "securityfs",
    "sysfs",
    "tmpfs",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemVolumeProbe;

impl SystemVolumeProbe {
    pub const fn new() -> Self {
        Self
    }
}

impl VolumeProbePort for SystemVolumeProbe {
    fn mounts(&self) -> Vec<VolumeMount> {
        let disks = Disks::new_with_refreshed_list();
        first_mount_per_device(
            disks
                .list()
                .iter()
                .filter(|disk| !is_pseudo_filesystem(&disk.file_system().to_string_lossy()))
                .map(|disk| VolumeMount::new(device_name(disk), disk.mount_point())),
        )
    }

    fn usage(&self, mount: &VolumeMount) -> TelemetryResult<VolumeSample> {
        stat_volume(&mount.mount_point)
    }
}

fn is_pseudo_filesystem(fs_type: &str) -> bool {
    PSEUDO_FILESYSTEMS.contains(&fs_type)
}

/// Keep the first mount point of each device, in enumeration order.
///
/// Bind mounts, btrfs subvolumes and container mounts list one device
/// several times.
fn first_mount_per_device(mounts: impl IntoIterator<Item = VolumeMount>) -> Vec<VolumeMount> {
    let mut seen = HashSet::new();
    mounts
        .into_iter()
        .filter(|mount| seen.insert(mount.device.clone()))
        .collect()
}

/// Device identifier for a disk.
///
/// Windows reports the volume label as the name, which may be empty or
/// shared between drives, so the drive root is used there instead.
fn device_name(disk: &Disk) -> String {
    let name = disk.name().to_string_lossy();
    if cfg!(windows) || name.is_empty() {
        disk.mount_point().display().to_string()
    } else {
        name.into_owned()
    }
}

#[cfg(unix)]
#[allow(clippy::useless_conversion)] // statvfs field widths differ per platform
fn stat_volume(mount_point: &Path) -> TelemetryResult<VolumeSample> {
    use nix::errno::Errno;
    use nix::sys::statvfs::statvfs;

    let stat = statvfs(mount_point).map_err(|errno| {
        let reason = format!("{}: {errno}", mount_point.display());
        match errno {
            Errno::EACCES | Errno::EPERM => TelemetryError::denied(reason),
            _ => TelemetryError::unavailable(reason),
        }
    })?;

    let fragment = u64::from(stat.fragment_size());
    Ok(volume_sample(
        u64::from(stat.blocks()).saturating_mul(fragment),
        u64::from(stat.blocks_free()).saturating_mul(fragment),
        u64::from(stat.blocks_available()).saturating_mul(fragment),
    ))
}

#[cfg(not(unix))]
fn stat_volume(mount_point: &Path) -> TelemetryResult<VolumeSample> {
    let disks = Disks::new_with_refreshed_list();
    let disk = disks
        .list()
        .iter()
        .find(|disk| disk.mount_point() == mount_point)
        .ok_or_else(|| {
            TelemetryError::unavailable(format!("{} is no longer mounted", mount_point.display()))
        })?;

    let available = disk.available_space();
    Ok(volume_sample(disk.total_space(), available, available))
}

/// Build a sample from raw byte counts. `free` includes blocks reserved
/// for the superuser; `available` does not.
const fn volume_sample(total: u64, free: u64, available: u64) -> VolumeSample {
    VolumeSample {
        total_bytes: total,
        used_bytes: total.saturating_sub(free),
        available_bytes: available,
    }
}
