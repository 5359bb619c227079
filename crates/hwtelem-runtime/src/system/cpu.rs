//! CPU load and temperature via sysinfo.

use std::thread;
use std::time::Duration;

use hwtelem_core::{CpuProbePort, TelemetryError, TelemetryResult};
use sysinfo::{Components, Cpu, CpuRefreshKind, MINIMUM_CPU_UPDATE_INTERVAL, RefreshKind, System};

/// Sensor label fragments that identify the CPU package, checked in order.
const CPU_SENSOR_HINTS: [&str; 6] = ["package", "tctl", "tdie", "coretemp", "k10temp", "cpu"];

/// Samples processors through sysinfo. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoCpuProbe;

impl SysinfoCpuProbe {
    pub const fn new() -> Self {
        Self
    }
}

impl CpuProbePort for SysinfoCpuProbe {
    fn sample_core_usage(&self, window: Duration) -> TelemetryResult<Vec<f32>> {
        let mut system = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
        );

        // Usage is the delta between two refreshes
        system.refresh_cpu_usage();
        thread::sleep(window.max(MINIMUM_CPU_UPDATE_INTERVAL));
        system.refresh_cpu_usage();

        Ok(system.cpus().iter().map(Cpu::cpu_usage).collect())
    }

    fn temperature(&self) -> TelemetryResult<f32> {
        let components = Components::new_with_refreshed_list();
        let labels: Vec<String> = components
            .list()
            .iter()
            .map(|c| c.label().to_lowercase())
            .collect();

        let sensor = pick_cpu_sensor(&labels)
            .and_then(|index| components.list().get(index))
            .ok_or_else(|| TelemetryError::unavailable("no CPU temperature sensor exposed"))?;

        sensor
            .temperature()
            .ok_or_else(|| TelemetryError::unavailable("CPU sensor reported no temperature"))
    }
}

/// Index of the best CPU sensor among lowercase `labels`.
///
/// Earlier hints win over later ones; within a hint the first label wins.
fn pick_cpu_sensor(labels: &[String]) -> Option<usize> {
    CPU_SENSOR_HINTS
        .iter()
        .find_map(|hint| labels.iter().position(|label| label.contains(hint)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_lowercase()).collect()
    }

    #[test]
    fn test_prefers_package_sensor() {
        let found = pick_cpu_sensor(&labels(&[
            "acpitz temp1",
            "coretemp Core 0",
            "coretemp Package id 0",
        ]));
        assert_eq!(found, Some(2));
    }

    #[test]
    fn test_amd_tctl() {
        let found = pick_cpu_sensor(&labels(&["nvme Composite", "k10temp Tctl"]));
        assert_eq!(found, Some(1));
    }

    #[test]
    fn test_no_cpu_sensor() {
        assert_eq!(pick_cpu_sensor(&labels(&["nvme Composite", "iwlwifi_1"])), None);
        assert_eq!(pick_cpu_sensor(&[]), None);
    }
}
