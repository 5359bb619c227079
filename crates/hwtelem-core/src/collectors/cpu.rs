//! CPU utilisation and temperature.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{Reading, Section, SectionReading};
use crate::policy::or_not_available;
use crate::ports::{CpuProbePort, TelemetryError, TelemetryResult};

use super::SectionCollector;

/// Length of the blocking utilisation window.
pub const DEFAULT_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

pub const LABEL_UTILISATION: &str = "Average Utilisation";
pub const LABEL_TEMPERATURE: &str = "Temperature";

/// Averages per-core load over a fixed window and reports package
/// temperature. The two values degrade independently.
pub struct CpuCollector {
    probe: Arc<dyn CpuProbePort>,
    window: Duration,
}

impl CpuCollector {
    pub fn new(probe: Arc<dyn CpuProbePort>) -> Self {
        Self {
            probe,
            window: DEFAULT_SAMPLE_WINDOW,
        }
    }

    #[must_use]
    pub const fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    fn average_usage(&self) -> TelemetryResult<f64> {
        let cores = self.probe.sample_core_usage(self.window)?;
        mean(&cores).ok_or_else(|| TelemetryError::unavailable("no logical cores reported"))
    }

    fn temperature(&self) -> TelemetryResult<f32> {
        let celsius = self.probe.temperature()?;
        if celsius.is_finite() {
            Ok(celsius)
        } else {
            Err(TelemetryError::malformed(format!(
                "non-finite CPU temperature {celsius}"
            )))
        }
    }
}

/// Arithmetic mean, `None` for an empty slice.
#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().copied().map(f64::from).sum();
    Some(sum / values.len() as f64)
}

impl SectionCollector for CpuCollector {
    fn section(&self) -> Section {
        Section::Cpu
    }

    fn collect(&self) -> SectionReading {
        let utilisation = or_not_available("cpu.usage", self.average_usage(), |avg| {
            format!("{avg:.2}%")
        });
        let temperature = or_not_available("cpu.temperature", self.temperature(), |c| {
            format!("{c:.1}°C")
        });

        SectionReading::Metrics(
            Reading::new()
                .with(LABEL_UTILISATION, utilisation)
                .with(LABEL_TEMPERATURE, temperature),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::NOT_AVAILABLE;
    use std::sync::Mutex;

    struct MockCpuProbe {
        cores: TelemetryResult<Vec<f32>>,
        temperature: TelemetryResult<f32>,
        windows: Mutex<Vec<Duration>>,
    }

    impl MockCpuProbe {
        fn new(cores: TelemetryResult<Vec<f32>>, temperature: TelemetryResult<f32>) -> Self {
            Self {
                cores,
                temperature,
                windows: Mutex::new(Vec::new()),
            }
        }
    }

    impl CpuProbePort for MockCpuProbe {
        fn sample_core_usage(&self, window: Duration) -> TelemetryResult<Vec<f32>> {
            self.windows.lock().unwrap().push(window);
            self.cores.clone()
        }

        fn temperature(&self) -> TelemetryResult<f32> {
            self.temperature.clone()
        }
    }

    fn metrics(collector: &CpuCollector) -> Reading {
        collector.collect().as_metrics().cloned().unwrap()
    }

    #[test]
    fn test_average_of_cores() {
        let probe = MockCpuProbe::new(Ok(vec![10.0, 20.0, 31.0]), Ok(55.26));
        let reading = metrics(&CpuCollector::new(Arc::new(probe)));
        assert_eq!(reading.get(LABEL_UTILISATION), Some("20.33%"));
        assert_eq!(reading.get(LABEL_TEMPERATURE), Some("55.3°C"));
    }

    #[test]
    fn test_empty_core_list_is_not_available() {
        let probe = MockCpuProbe::new(Ok(Vec::new()), Ok(40.0));
        let reading = metrics(&CpuCollector::new(Arc::new(probe)));
        assert_eq!(reading.get(LABEL_UTILISATION), Some(NOT_AVAILABLE));
        assert_eq!(reading.get(LABEL_TEMPERATURE), Some("40.0°C"));
    }

    #[test]
    fn test_temperature_failure_does_not_touch_usage() {
        let probe = MockCpuProbe::new(
            Ok(vec![50.0, 50.0]),
            Err(TelemetryError::unavailable("no hwmon driver")),
        );
        let reading = metrics(&CpuCollector::new(Arc::new(probe)));
        assert_eq!(reading.get(LABEL_UTILISATION), Some("50.00%"));
        assert_eq!(reading.get(LABEL_TEMPERATURE), Some(NOT_AVAILABLE));
    }

    #[test]
    fn test_non_finite_temperature_is_not_available() {
        let probe = MockCpuProbe::new(Ok(vec![1.0]), Ok(f32::NAN));
        let reading = metrics(&CpuCollector::new(Arc::new(probe)));
        assert_eq!(reading.get(LABEL_TEMPERATURE), Some(NOT_AVAILABLE));
    }

    #[test]
    fn test_window_is_passed_to_probe() {
        let probe = Arc::new(MockCpuProbe::new(Ok(vec![1.0]), Ok(1.0)));
        let collector =
            CpuCollector::new(probe.clone()).with_window(Duration::from_millis(250));
        collector.collect();
        collector.collect();
        assert_eq!(
            *probe.windows.lock().unwrap(),
            [Duration::from_millis(250), Duration::from_millis(250)]
        );
    }
}
