//! RAM statistics via sysinfo.

use hwtelem_core::{MemoryProbePort, MemorySample};
use sysinfo::{MemoryRefreshKind, System};

#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoMemoryProbe;

impl SysinfoMemoryProbe {
    pub const fn new() -> Self {
        Self
    }
}

impl MemoryProbePort for SysinfoMemoryProbe {
    fn sample(&self) -> MemorySample {
        let mut system = System::new();
        system.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());

        MemorySample {
            total_bytes: system.total_memory(),
            used_bytes: system.used_memory(),
            available_bytes: system.available_memory(),
        }
    }
}
