//! Section dispatcher.
//!
//! `TelemetryService` is the query interface the outer layers call. It maps
//! a section name to its collector and returns whatever that collector
//! reports. Nothing is cached between calls, and concurrent calls share no
//! locks: each performs its own complete sample.

use tracing::debug;

use crate::collectors::{
    CoolantCollector, CpuCollector, GpuCollector, MemoryCollector, SectionCollector,
    StorageCollector,
};
use crate::domain::{Section, SectionReading};
use crate::ports::Probes;
use crate::settings::Settings;

/// Routes section queries to collectors.
pub struct TelemetryService {
    cpu: CpuCollector,
    gpu: GpuCollector,
    ram: MemoryCollector,
    storage: StorageCollector,
    coolant: CoolantCollector,
}

impl TelemetryService {
    /// Bind every section to a collector over the given probes.
    pub fn new(probes: Probes, settings: &Settings) -> Self {
        Self {
            cpu: CpuCollector::new(probes.cpu).with_window(settings.effective_cpu_window()),
            gpu: GpuCollector::new(probes.gpu)
                .with_device_index(settings.effective_gpu_device_index()),
            ram: MemoryCollector::new(probes.memory),
            storage: StorageCollector::new(probes.volumes),
            coolant: CoolantCollector::new(probes.coolant),
        }
    }

    /// Query a section by name, ignoring ASCII case.
    ///
    /// Returns `None` only when the name is not a known section; a known
    /// section whose sources all failed still yields a sentinel-filled
    /// reading. Blocks for as long as the collector samples.
    pub fn get(&self, name: &str) -> Option<SectionReading> {
        let Some(section) = Section::from_name(name) else {
            debug!(name, "unknown section requested");
            return None;
        };
        Some(self.collect(section))
    }

    /// Sample a known section.
    pub fn collect(&self, section: Section) -> SectionReading {
        debug!(%section, "collecting section");
        self.collector(section).collect()
    }

    fn collector(&self, section: Section) -> &dyn SectionCollector {
        match section {
            Section::Cpu => &self.cpu,
            Section::Gpu => &self.gpu,
            Section::Ram => &self.ram,
            Section::Storage => &self.storage,
            Section::Coolant => &self.coolant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TelemetryService>();
    }
}
