//! Sensor table layout constants.
//!
//! The exporting tool does not document these offsets. They are a binary
//! compatibility contract and must not be re-derived.

/// Offset of the little-endian `u16` record count.
pub const COUNT_OFFSET: usize = 0;

/// Header size: record count plus two reserved bytes that are never read.
pub const HEADER_LEN: usize = 4;

/// Width of one sensor record.
pub const RECORD_LEN: usize = 128;

/// Offset of the little-endian `f32` value within a record.
pub const VALUE_OFFSET: usize = 68;

/// The label is the NUL-padded UTF-16LE text in front of the value.
/// Bytes between the label terminator and the value are opaque.
pub const LABEL_LEN: usize = VALUE_OFFSET;
