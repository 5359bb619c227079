//! Domain types for hardware telemetry.
//!
//! Pure data with no OS access. Probes produce samples, collectors turn
//! them into readings.

mod reading;
mod samples;
mod section;

pub use reading::{Reading, SectionReading, StorageReading, VolumeEntry};
pub use samples::{GpuSample, MemorySample, VolumeMount, VolumeSample};
pub use section::Section;
