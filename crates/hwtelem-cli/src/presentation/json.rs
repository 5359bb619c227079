//! JSON envelope around a section reading.

use chrono::{DateTime, SecondsFormat, Utc};
use hwtelem_core::{Section, SectionReading};
use serde_json::{Value, json};

/// Wrap a reading as `{"section", "sampled_at", "data"}`.
pub fn envelope(section: Section, sampled_at: DateTime<Utc>, reading: &SectionReading) -> Value {
    json!({
        "section": section.as_str(),
        "sampled_at": sampled_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        "data": reading,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hwtelem_core::{Reading, StorageReading, VolumeEntry};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_metrics_envelope() {
        let reading = SectionReading::Metrics(
            Reading::new()
                .with("Temperature", "61°C")
                .with("Utilisation", "7%"),
        );
        let value = envelope(Section::Gpu, at(), &reading);
        assert_eq!(
            value,
            json!({
                "section": "gpu",
                "sampled_at": "2026-03-01T12:30:00.000Z",
                "data": {"Temperature": "61°C", "Utilisation": "7%"},
            })
        );
    }

    #[test]
    fn test_storage_envelope_keeps_denial_marker() {
        let mut volumes = StorageReading::new();
        volumes.insert("/dev/sdb1", VolumeEntry::PermissionDenied);
        let value = envelope(Section::Storage, at(), &SectionReading::Volumes(volumes));
        assert_eq!(value["data"]["/dev/sdb1"], "Permission Denied");
    }
}
