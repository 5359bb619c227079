//! Hardware probes for hwtelem backed by the host OS.
//!
//! - CPU, memory, disks and temperature sensors through `sysinfo`
//! - NVIDIA GPUs through NVML, with `nvidia-smi` as a fallback
//! - Per-mount usage through `statvfs` on Unix
//! - Coolant temperature through `hwtelem-coolant`

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod system;

pub use system::{
    NvidiaGpuProbe, SysinfoCpuProbe, SysinfoMemoryProbe, SystemVolumeProbe, build_service,
    default_probes,
};
