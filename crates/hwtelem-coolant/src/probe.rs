//! Coolant probe backed by the sensor tool's shared-memory export.

use std::path::PathBuf;

use hwtelem_core::{CoolantProbePort, Settings, TelemetryResult};

use crate::error::CoolantResult;
use crate::parser::{SensorMatch, SensorTableParser};
use crate::segment::SharedSegment;

/// Reads the coolant temperature from a named segment on every call.
///
/// The segment is mapped at the start of a read and released before the
/// read returns, whether a sensor was found or not.
#[derive(Debug, Clone)]
pub struct SharedMemoryCoolantProbe {
    segment_name: String,
    shm_dir: PathBuf,
    parser: SensorTableParser,
}

impl SharedMemoryCoolantProbe {
    pub fn new(
        segment_name: impl Into<String>,
        shm_dir: impl Into<PathBuf>,
        needle: impl Into<String>,
    ) -> Self {
        Self {
            segment_name: segment_name.into(),
            shm_dir: shm_dir.into(),
            parser: SensorTableParser::new(needle),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.effective_coolant_segment(),
            settings.effective_shm_dir(),
            settings.effective_coolant_label(),
        )
    }

    pub fn segment_name(&self) -> &str {
        &self.segment_name
    }

    /// Map the segment and look up the coolant sensor.
    pub fn read(&self) -> CoolantResult<SensorMatch> {
        let segment = SharedSegment::open(&self.segment_name, &self.shm_dir)?;
        self.parser.find(&segment)
    }
}

impl CoolantProbePort for SharedMemoryCoolantProbe {
    fn coolant_temperature(&self) -> TelemetryResult<f32> {
        self.read().map(|found| found.value).map_err(Into::into)
    }
}
