//! Section collectors.
//!
//! Each collector owns one section: it samples its probe port, formats the
//! values and applies the degradation policy. A collector never returns an
//! error; a failed source shows up as sentinel text in the reading.

mod coolant;
mod cpu;
mod gpu;
mod memory;
mod storage;

pub use coolant::CoolantCollector;
pub use cpu::{CpuCollector, DEFAULT_SAMPLE_WINDOW};
pub use gpu::GpuCollector;
pub use memory::MemoryCollector;
pub use storage::StorageCollector;

use crate::domain::{Section, SectionReading};

/// Shared "collect → reading" capability.
///
/// Every call samples live state; implementations hold no cache.
pub trait SectionCollector: Send + Sync {
    /// The section this collector answers for.
    fn section(&self) -> Section;

    /// Take a fresh sample. May block (the CPU collector blocks for its
    /// whole sampling window).
    fn collect(&self) -> SectionReading;
}
