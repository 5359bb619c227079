//! Coolant temperature from HWiNFO's shared-memory sensor export.
//!
//! HWiNFO publishes its sensor readings in a named shared-memory segment
//! but offers no API for it. This crate maps the segment read-only, walks
//! the fixed-layout record table and returns the first sensor whose label
//! contains a configured substring (`"T-Sensor"` by default).
//!
//! Layout (all little-endian):
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 2 | record count (`u16`) |
//! | 2 | 2 | reserved, never read |
//! | 4 + 128·i | 128 | record `i` |
//! | +0 | 68 | label, NUL-padded UTF-16 |
//! | +68 | 4 | value (`f32`) |

#![deny(unused_crate_dependencies)]

mod error;
mod format;
mod parser;
mod probe;
mod reader;
mod segment;

pub use error::{CoolantError, CoolantResult};
pub use format::{HEADER_LEN, LABEL_LEN, RECORD_LEN, VALUE_OFFSET};
pub use parser::{SensorMatch, SensorTableParser};
pub use probe::SharedMemoryCoolantProbe;
pub use reader::{SensorRecord, SensorTable, decode_label};
pub use segment::{SharedSegment, segment_file_name};

// tempfile backs the file-mapped segment tests
#[cfg(test)]
use tempfile as _;
