//! RAM usage.

use std::sync::Arc;

use crate::domain::{Reading, Section, SectionReading};
use crate::ports::MemoryProbePort;
use crate::units::{format_gigabytes, format_percent, percent_of};

use super::SectionCollector;

pub const LABEL_USED: &str = "Used";
pub const LABEL_TOTAL: &str = "Total";
pub const LABEL_UTILISATION: &str = "Utilisation";

/// Reports used and total memory in GB plus utilisation. Has no
/// degradation branch.
pub struct MemoryCollector {
    probe: Arc<dyn MemoryProbePort>,
}

impl MemoryCollector {
    pub fn new(probe: Arc<dyn MemoryProbePort>) -> Self {
        Self { probe }
    }
}

impl SectionCollector for MemoryCollector {
    fn section(&self) -> Section {
        Section::Ram
    }

    fn collect(&self) -> SectionReading {
        let sample = self.probe.sample();
        let used = sample.used_bytes.min(sample.total_bytes);
        let in_use = sample
            .total_bytes
            .saturating_sub(sample.available_bytes.min(sample.total_bytes));

        SectionReading::Metrics(
            Reading::new()
                .with(LABEL_USED, format_gigabytes(used))
                .with(LABEL_TOTAL, format_gigabytes(sample.total_bytes))
                .with(
                    LABEL_UTILISATION,
                    format_percent(percent_of(in_use, sample.total_bytes)),
                ),
        )
    }
}
