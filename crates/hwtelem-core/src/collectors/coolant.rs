//! Liquid-coolant temperature.

use std::sync::Arc;

use crate::domain::{Reading, Section, SectionReading};
use crate::policy::or_not_available;
use crate::ports::CoolantProbePort;

use super::SectionCollector;

pub const LABEL_TEMPERATURE: &str = "Temperature";

pub struct CoolantCollector {
    probe: Arc<dyn CoolantProbePort>,
}

impl CoolantCollector {
    pub fn new(probe: Arc<dyn CoolantProbePort>) -> Self {
        Self { probe }
    }
}

impl SectionCollector for CoolantCollector {
    fn section(&self) -> Section {
        Section::Coolant
    }

    fn collect(&self) -> SectionReading {
        let temperature =
            or_not_available("coolant", self.probe.coolant_temperature(), |celsius| {
                format!("{celsius:.2}°C")
            });
        SectionReading::Metrics(Reading::new().with(LABEL_TEMPERATURE, temperature))
    }
}
