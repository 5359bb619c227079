//! Bounds-checked view over the exported sensor table.
//!
//! Nothing here trusts the segment: every offset is checked against the
//! mapped length before it is read.

use crate::error::{CoolantError, CoolantResult};
use crate::format::{COUNT_OFFSET, HEADER_LEN, LABEL_LEN, RECORD_LEN, VALUE_OFFSET};

/// The sensor table at the start of a segment.
#[derive(Debug, Clone, Copy)]
pub struct SensorTable<'a> {
    bytes: &'a [u8],
    count: u16,
}

impl<'a> SensorTable<'a> {
    /// Read the table header.
    pub fn new(bytes: &'a [u8]) -> CoolantResult<Self> {
        let count = read_u16_le(bytes, COUNT_OFFSET)?;
        Ok(Self { bytes, count })
    }

    /// Number of records the header claims.
    pub const fn record_count(&self) -> u16 {
        self.count
    }

    /// Borrow record `index`.
    ///
    /// Fails with [`CoolantError::Truncated`] when the record does not fit
    /// in the mapping, even if the header claims it exists.
    pub fn record(&self, index: usize) -> CoolantResult<SensorRecord<'a>> {
        let truncated = || CoolantError::Truncated {
            needed: index
                .saturating_add(1)
                .saturating_mul(RECORD_LEN)
                .saturating_add(HEADER_LEN),
            len: self.bytes.len(),
        };
        let start = index
            .checked_mul(RECORD_LEN)
            .and_then(|off| off.checked_add(HEADER_LEN))
            .ok_or_else(truncated)?;
        let end = start.checked_add(RECORD_LEN).ok_or_else(truncated)?;
        let bytes: &'a [u8; RECORD_LEN] = self
            .bytes
            .get(start..end)
            .and_then(|slice| slice.try_into().ok())
            .ok_or_else(truncated)?;
        Ok(SensorRecord { index, bytes })
    }

    /// Records in index order, as many as the header claims.
    pub fn records(&self) -> impl Iterator<Item = CoolantResult<SensorRecord<'a>>> {
        let table = *self;
        (0..usize::from(self.count)).map(move |index| table.record(index))
    }
}

/// One 128-byte sensor record.
#[derive(Debug, Clone, Copy)]
pub struct SensorRecord<'a> {
    index: usize,
    bytes: &'a [u8; RECORD_LEN],
}

impl SensorRecord<'_> {
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Decoded label, with NUL padding removed.
    pub fn label(&self) -> String {
        decode_label(&self.bytes[..LABEL_LEN])
    }

    /// Raw value at [`VALUE_OFFSET`].
    pub fn value(&self) -> f32 {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&self.bytes[VALUE_OFFSET..VALUE_OFFSET + 4]);
        f32::from_le_bytes(raw)
    }
}

/// Decode a NUL-padded UTF-16LE field permissively.
///
/// Text ends at the first NUL code unit. Unpaired surrogates are dropped
/// rather than rejected, and a leading byte-order mark is skipped.
pub fn decode_label(field: &[u8]) -> String {
    let units = field
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|&unit| unit != 0);

    char::decode_utf16(units)
        .filter_map(Result::ok)
        .skip_while(|&c| c == '\u{feff}')
        .collect()
}

fn read_u16_le(bytes: &[u8], offset: usize) -> CoolantResult<u16> {
    let end = offset + 2;
    bytes
        .get(offset..end)
        .map(|raw| u16::from_le_bytes([raw[0], raw[1]]))
        .ok_or(CoolantError::Truncated {
            needed: end,
            len: bytes.len(),
        })
}
