//! Plain-text rendering for terminals.

use std::fmt::Write;

use hwtelem_core::{PERMISSION_DENIED, Reading, Section, SectionReading};

const INDENT: &str = "  ";

/// Render a reading under its section heading.
///
/// ```text
/// CPU
///   Average Utilisation  12.50%
///   Temperature          48.0°C
/// ```
pub fn render_section(section: Section, reading: &SectionReading) -> String {
    let mut out = format!("{}\n", section.title());
    match reading {
        SectionReading::Metrics(metrics) => write_metrics(&mut out, metrics, INDENT),
        SectionReading::Volumes(volumes) => {
            if volumes.is_empty() {
                let _ = writeln!(out, "{INDENT}(no volumes)");
            }
            for (device, entry) in volumes.iter() {
                match entry.usage() {
                    Some(usage) => {
                        let _ = writeln!(out, "{INDENT}{device}");
                        write_metrics(&mut out, usage, &INDENT.repeat(2));
                    }
                    None => {
                        let _ = writeln!(out, "{INDENT}{device}  {PERMISSION_DENIED}");
                    }
                }
            }
        }
    }
    out
}

fn write_metrics(out: &mut String, metrics: &Reading, indent: &str) {
    let width = metrics
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in metrics.iter() {
        let _ = writeln!(out, "{indent}{label:<width$}  {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwtelem_core::{NOT_AVAILABLE, StorageReading, VolumeEntry};

    #[test]
    fn test_render_metrics_aligned() {
        let reading = SectionReading::Metrics(
            Reading::new()
                .with("Average Utilisation", "12.50%")
                .with("Temperature", "48.0°C"),
        );
        assert_eq!(
            render_section(Section::Cpu, &reading),
            "CPU\n  Average Utilisation  12.50%\n  Temperature          48.0°C\n"
        );
    }

    #[test]
    fn test_render_storage() {
        let mut volumes = StorageReading::new();
        volumes.insert(
            "/dev/sda1",
            VolumeEntry::Usage(
                Reading::new()
                    .with("Total", "100.00 GB")
                    .with("Used", "40.00 GB")
                    .with("Utilisation", "40.0%"),
            ),
        );
        volumes.insert("/dev/sdb1", VolumeEntry::PermissionDenied);

        let text = render_section(Section::Storage, &SectionReading::Volumes(volumes));
        assert_eq!(
            text,
            "Storage\n  /dev/sda1\n    Total        100.00 GB\n    Used         40.00 GB\n    \
             Utilisation  40.0%\n  /dev/sdb1  Permission Denied\n"
        );
    }

    #[test]
    fn test_render_sentinels_verbatim() {
        let reading = SectionReading::Metrics(Reading::new().with("Temperature", NOT_AVAILABLE));
        assert_eq!(
            render_section(Section::Coolant, &reading),
            "Coolant\n  Temperature  Not Available\n"
        );
    }

    #[test]
    fn test_render_no_volumes() {
        let text = render_section(Section::Storage, &SectionReading::Volumes(StorageReading::new()));
        assert_eq!(text, "Storage\n  (no volumes)\n");
    }
}
