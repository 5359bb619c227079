//! Coolant sensor lookup over a sensor table.

use tracing::trace;

use crate::error::{CoolantError, CoolantResult};
use crate::reader::SensorTable;

/// The record that matched the label needle.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorMatch {
    pub index: usize,
    pub label: String,
    pub value: f32,
}

/// Finds the first sensor whose label contains a fixed substring.
#[derive(Debug, Clone)]
pub struct SensorTableParser {
    needle: String,
}

impl SensorTableParser {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }

    /// Scan records in index order and return the first match.
    ///
    /// Records after the match are never touched, so a header that
    /// overstates the count only fails if the scan reaches the missing
    /// records.
    pub fn find(&self, segment: &[u8]) -> CoolantResult<SensorMatch> {
        let table = SensorTable::new(segment)?;
        trace!(count = table.record_count(), len = segment.len(), "sensor table header");

        for record in table.records() {
            let record = record?;
            let label = record.label();
            if !label.contains(self.needle.as_str()) {
                continue;
            }

            let value = record.value();
            trace!(index = record.index(), %label, value, "matched sensor");
            if !value.is_finite() {
                return Err(CoolantError::NonFiniteValue {
                    index: record.index(),
                    value,
                });
            }
            return Ok(SensorMatch {
                index: record.index(),
                label,
                value,
            });
        }

        Err(CoolantError::SensorNotFound {
            needle: self.needle.clone(),
            scanned: usize::from(table.record_count()),
        })
    }
}
