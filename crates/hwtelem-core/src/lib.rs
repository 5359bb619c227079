//! Core domain for hwtelem: single-host hardware telemetry.
//!
//! This crate owns the query contract ([`TelemetryService::get`]), the
//! section collectors and the degradation policy. It performs no OS access
//! itself; every hardware source is reached through a port in [`ports`].
//!
//! ```ignore
//! use hwtelem_core::{Settings, TelemetryService};
//!
//! let service = TelemetryService::new(probes, &Settings::with_defaults());
//! match service.get("CPU") {
//!     Some(reading) => println!("{}", serde_json::to_string(&reading)?),
//!     None => eprintln!("Invalid section"),
//! }
//! ```

#![deny(unused_crate_dependencies)]

pub mod collectors;
pub mod domain;
pub mod policy;
pub mod ports;
pub mod services;
pub mod settings;
pub mod units;

// Re-export commonly used types for convenience
pub use collectors::SectionCollector;
pub use domain::{
    GpuSample, MemorySample, Reading, Section, SectionReading, StorageReading, VolumeEntry,
    VolumeMount, VolumeSample,
};
pub use policy::{NOT_AVAILABLE, PERMISSION_DENIED};
pub use ports::{
    CoolantProbePort, CpuProbePort, GpuProbePort, MemoryProbePort, Probes, TelemetryError,
    TelemetryResult, VolumeProbePort,
};
pub use services::TelemetryService;
pub use settings::{Settings, SettingsError, validate_settings};

// serde_json is only exercised by unit tests
#[cfg(test)]
use serde_json as _;
