//! GPU temperature and utilisation via the vendor driver.

use std::sync::Arc;

use crate::domain::{Reading, Section, SectionReading};
use crate::policy::{NOT_AVAILABLE, log_degraded};
use crate::ports::GpuProbePort;

use super::SectionCollector;

pub const LABEL_TEMPERATURE: &str = "Temperature";
pub const LABEL_UTILISATION: &str = "Utilisation";

/// Reports one GPU. Failure is all-or-nothing: if any step of the driver
/// chain fails, both fields read [`NOT_AVAILABLE`].
pub struct GpuCollector {
    probe: Arc<dyn GpuProbePort>,
    device_index: u32,
}

impl GpuCollector {
    pub fn new(probe: Arc<dyn GpuProbePort>) -> Self {
        Self {
            probe,
            device_index: 0,
        }
    }

    #[must_use]
    pub const fn with_device_index(mut self, device_index: u32) -> Self {
        self.device_index = device_index;
        self
    }

    /// The reading reported when the driver chain fails.
    pub fn unavailable() -> Reading {
        Reading::new()
            .with(LABEL_TEMPERATURE, NOT_AVAILABLE)
            .with(LABEL_UTILISATION, NOT_AVAILABLE)
    }
}

impl SectionCollector for GpuCollector {
    fn section(&self) -> Section {
        Section::Gpu
    }

    fn collect(&self) -> SectionReading {
        let reading = match self.probe.sample(self.device_index) {
            Ok(sample) => Reading::new()
                .with(LABEL_TEMPERATURE, format!("{}°C", sample.temperature_c))
                .with(LABEL_UTILISATION, format!("{}%", sample.utilization_pct)),
            Err(err) => {
                log_degraded("gpu", &err);
                Self::unavailable()
            }
        };
        SectionReading::Metrics(reading)
    }
}
