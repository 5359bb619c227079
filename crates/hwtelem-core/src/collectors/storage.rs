//! Per-volume storage usage.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    Reading, Section, SectionReading, StorageReading, VolumeEntry, VolumeMount, VolumeSample,
};
use crate::policy::{NOT_AVAILABLE, log_degraded};
use crate::ports::{TelemetryError, VolumeProbePort};
use crate::units::{format_gigabytes, format_percent, percent_of};

use super::SectionCollector;

pub const LABEL_USED: &str = "Used";
pub const LABEL_TOTAL: &str = "Total";
pub const LABEL_UTILISATION: &str = "Utilisation";

/// Reports usage for every real mounted volume.
///
/// Failures are isolated per device: a denial becomes
/// [`VolumeEntry::PermissionDenied`], any other failure a reading of
/// sentinels, and enumeration always continues.
pub struct StorageCollector {
    probe: Arc<dyn VolumeProbePort>,
}

impl StorageCollector {
    pub fn new(probe: Arc<dyn VolumeProbePort>) -> Self {
        Self { probe }
    }

    fn usage_reading(sample: VolumeSample) -> Reading {
        // Percent is relative to what unprivileged users can reach, so
        // root-reserved blocks do not count as free.
        let reachable = sample.used_bytes.saturating_add(sample.available_bytes);
        Reading::new()
            .with(LABEL_USED, format_gigabytes(sample.used_bytes))
            .with(LABEL_TOTAL, format_gigabytes(sample.total_bytes))
            .with(
                LABEL_UTILISATION,
                format_percent(percent_of(sample.used_bytes, reachable)),
            )
    }

    fn unavailable_reading() -> Reading {
        Reading::new()
            .with(LABEL_USED, NOT_AVAILABLE)
            .with(LABEL_TOTAL, NOT_AVAILABLE)
            .with(LABEL_UTILISATION, NOT_AVAILABLE)
    }

    fn entry_for(&self, mount: &VolumeMount) -> VolumeEntry {
        match self.probe.usage(mount) {
            Ok(sample) => VolumeEntry::Usage(Self::usage_reading(sample)),
            Err(TelemetryError::PermissionDenied(reason)) => {
                debug!(device = %mount.device, %reason, "volume access denied");
                VolumeEntry::PermissionDenied
            }
            Err(err) => {
                log_degraded("storage", &err);
                VolumeEntry::Usage(Self::unavailable_reading())
            }
        }
    }
}

impl SectionCollector for StorageCollector {
    fn section(&self) -> Section {
        Section::Storage
    }

    fn collect(&self) -> SectionReading {
        let mut volumes = StorageReading::new();
        for mount in self.probe.mounts() {
            // Bind mounts repeat a device; its first mount point speaks for it
            if volumes.get(&mount.device).is_some() {
                debug!(
                    device = %mount.device,
                    mount_point = %mount.mount_point.display(),
                    "skipping repeated device"
                );
                continue;
            }
            let entry = self.entry_for(&mount);
            volumes.insert(mount.device, entry);
        }
        SectionReading::Volumes(volumes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::TelemetryResult;

    struct MockVolumeProbe {
        mounts: Vec<(VolumeMount, TelemetryResult<VolumeSample>)>,
    }

    impl VolumeProbePort for MockVolumeProbe {
        fn mounts(&self) -> Vec<VolumeMount> {
            self.mounts.iter().map(|(m, _)| m.clone()).collect()
        }

        fn usage(&self, mount: &VolumeMount) -> TelemetryResult<VolumeSample> {
            self.mounts
                .iter()
                .find(|(m, _)| m == mount)
                .map(|(_, r)| r.clone())
                .unwrap_or_else(|| Err(TelemetryError::unavailable("unknown mount")))
        }
    }

    fn sample(used_gib: u64, total_gib: u64) -> TelemetryResult<VolumeSample> {
        Ok(VolumeSample {
            total_bytes: total_gib << 30,
            used_bytes: used_gib << 30,
            available_bytes: (total_gib - used_gib) << 30,
        })
    }

    fn collect(probe: MockVolumeProbe) -> StorageReading {
        StorageCollector::new(Arc::new(probe))
            .collect()
            .as_volumes()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_permission_failures_are_isolated() {
        let probe = MockVolumeProbe {
            mounts: vec![
                (VolumeMount::new("/dev/sda1", "/"), sample(30, 120)),
                (
                    VolumeMount::new("/dev/sdb1", "/mnt/locked"),
                    Err(TelemetryError::denied("EACCES")),
                ),
                (VolumeMount::new("/dev/sdc1", "/data"), sample(1, 4)),
                (
                    VolumeMount::new("/dev/sdd1", "/mnt/other"),
                    Err(TelemetryError::denied("EACCES")),
                ),
            ],
        };
        let storage = collect(probe);

        assert_eq!(storage.len(), 4);
        assert_eq!(storage.denied_count(), 2);
        let root = storage.get("/dev/sda1").and_then(VolumeEntry::usage).unwrap();
        assert_eq!(root.get(LABEL_USED), Some("30.00 GB"));
        assert_eq!(root.get(LABEL_TOTAL), Some("120.00 GB"));
        assert_eq!(root.get(LABEL_UTILISATION), Some("25.0%"));
        assert!(storage.get("/dev/sdb1").unwrap().is_denied());
    }

    #[test]
    fn test_other_failures_keep_the_entry() {
        let probe = MockVolumeProbe {
            mounts: vec![
                (
                    VolumeMount::new("/dev/sr0", "/media/cdrom"),
                    Err(TelemetryError::unavailable("no medium")),
                ),
                (VolumeMount::new("/dev/sda1", "/"), sample(2, 8)),
            ],
        };
        let storage = collect(probe);

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.denied_count(), 0);
        let cdrom = storage.get("/dev/sr0").and_then(VolumeEntry::usage).unwrap();
        assert!(cdrom.iter().all(|(_, v)| v == NOT_AVAILABLE));
        assert_eq!(cdrom.len(), 3);
    }

    #[test]
    fn test_percent_excludes_reserved_blocks() {
        let probe = MockVolumeProbe {
            mounts: vec![(
                VolumeMount::new("/dev/sda1", "/"),
                Ok(VolumeSample {
                    total_bytes: 100 << 30,
                    used_bytes: 45 << 30,
                    // 5 GiB reserved for root
                    available_bytes: 50 << 30,
                }),
            )],
        };
        let storage = collect(probe);
        let root = storage.get("/dev/sda1").and_then(VolumeEntry::usage).unwrap();
        assert_eq!(root.get(LABEL_UTILISATION), Some("47.4%"));
    }

    #[test]
    fn test_repeated_device_keeps_first_mount() {
        let probe = MockVolumeProbe {
            mounts: vec![
                (VolumeMount::new("/dev/sda1", "/"), sample(1, 4)),
                (
                    VolumeMount::new("/dev/sda1", "/srv/locked"),
                    Err(TelemetryError::denied("EACCES")),
                ),
                (VolumeMount::new("/dev/sdb1", "/data"), sample(2, 8)),
            ],
        };
        let storage = collect(probe);

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.denied_count(), 0);
        let root = storage.get("/dev/sda1").and_then(VolumeEntry::usage).unwrap();
        assert_eq!(root.get(LABEL_USED), Some("1.00 GB"));
        assert_eq!(root.get(LABEL_UTILISATION), Some("25.0%"));
    }

    #[test]
    fn test_no_volumes_is_an_empty_mapping() {
        let storage = collect(MockVolumeProbe { mounts: Vec::new() });
        assert!(storage.is_empty());
    }
}
