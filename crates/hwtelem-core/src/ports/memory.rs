//! Memory probe port.

use crate::domain::MemorySample;

/// Source of system memory statistics. Assumed infallible.
pub trait MemoryProbePort: Send + Sync {
    fn sample(&self) -> MemorySample;
}
