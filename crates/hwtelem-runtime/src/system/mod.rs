//! OS-backed probe implementations.
//!
//! This module provides the concrete probes behind each port in
//! `hwtelem-core` and wires them into a [`TelemetryService`].
//!
//! # Example
//!
//! ```ignore
//! use hwtelem_core::Settings;
//! use hwtelem_runtime::system::build_service;
//!
//! let service = build_service(&Settings::with_defaults());
//! let ram = service.get("ram");
//! ```

mod cpu;
mod gpu;
mod memory;
mod storage;

use std::sync::Arc;

use hwtelem_coolant::SharedMemoryCoolantProbe;
use hwtelem_core::{Probes, Settings, TelemetryService};
use tracing::debug;

pub use cpu::SysinfoCpuProbe;
pub use gpu::NvidiaGpuProbe;
pub use memory::SysinfoMemoryProbe;
pub use storage::SystemVolumeProbe;

/// The probes used on a real host.
pub fn default_probes(settings: &Settings) -> Probes {
    let coolant = SharedMemoryCoolantProbe::from_settings(settings);
    debug!(segment = coolant.segment_name(), "coolant probe configured");

    Probes {
        cpu: Arc::new(SysinfoCpuProbe::new()),
        gpu: Arc::new(NvidiaGpuProbe::new()),
        memory: Arc::new(SysinfoMemoryProbe::new()),
        volumes: Arc::new(SystemVolumeProbe::new()),
        coolant: Arc::new(coolant),
    }
}

/// Build a service over the host's real hardware sources.
pub fn build_service(settings: &Settings) -> TelemetryService {
    TelemetryService::new(default_probes(settings), settings)
}
