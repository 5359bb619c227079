//! Port definitions (trait abstractions) for hardware sources.
//!
//! Ports define the interfaces that collectors expect from the OS and
//! vendor tooling. Implementations live in adapter crates
//! (`hwtelem-runtime`, `hwtelem-coolant`).
//!
//! # Design Rules
//!
//! - Ports return raw samples or a [`TelemetryError`], never formatted text
//! - Sentinel text is decided by collectors, not by ports
//! - Every port is `Send + Sync` so queries can run on any thread

mod coolant;
mod cpu;
mod error;
mod gpu;
mod memory;
mod storage;

pub use coolant::CoolantProbePort;
pub use cpu::CpuProbePort;
pub use error::{TelemetryError, TelemetryResult};
pub use gpu::GpuProbePort;
pub use memory::MemoryProbePort;
pub use storage::VolumeProbePort;

use std::sync::Arc;

/// Container for all probe trait objects.
///
/// This struct provides a consistent way to wire probes into
/// [`TelemetryService`](crate::services::TelemetryService) without coupling
/// core to concrete implementations.
#[derive(Clone)]
pub struct Probes {
    pub cpu: Arc<dyn CpuProbePort>,
    pub gpu: Arc<dyn GpuProbePort>,
    pub memory: Arc<dyn MemoryProbePort>,
    pub volumes: Arc<dyn VolumeProbePort>,
    pub coolant: Arc<dyn CoolantProbePort>,
}
