//! Settings domain types and validation.
//!
//! Settings are read from `HWTELEM_*` environment variables. The binary
//! loads a `.env` file first, so the same keys can live there.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default CPU sampling window in milliseconds.
pub const DEFAULT_CPU_SAMPLE_MS: u64 = 1000;

/// Name of the shared-memory segment HWiNFO exports its sensors to.
pub const DEFAULT_COOLANT_SEGMENT: &str = r"Global\HWiNFO_SENS_SM2";

/// Label fragment that identifies the coolant sensor in the exported table.
pub const DEFAULT_COOLANT_LABEL: &str = "T-Sensor";

/// Directory holding named shared-memory segments on non-Windows hosts.
pub const DEFAULT_SHM_DIR: &str = "/dev/shm";

pub const ENV_CPU_SAMPLE_MS: &str = "HWTELEM_CPU_SAMPLE_MS";
pub const ENV_GPU_INDEX: &str = "HWTELEM_GPU_INDEX";
pub const ENV_COOLANT_SEGMENT: &str = "HWTELEM_COOLANT_SEGMENT";
pub const ENV_COOLANT_LABEL: &str = "HWTELEM_COOLANT_LABEL";
pub const ENV_SHM_DIR: &str = "HWTELEM_SHM_DIR";

/// Telemetry settings.
///
/// All fields are optional; `effective_*` accessors apply the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// CPU utilisation sampling window in milliseconds (100-10000).
    pub cpu_sample_ms: Option<u64>,

    /// Index of the GPU queried through the vendor driver.
    pub gpu_device_index: Option<u32>,

    /// Shared-memory segment exported by the sensor tool.
    pub coolant_segment: Option<String>,

    /// Substring that identifies the coolant sensor label.
    pub coolant_label: Option<String>,

    /// Directory that backs named segments outside Windows.
    pub shm_dir: Option<String>,
}

impl Settings {
    /// Create settings with every default filled in.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            cpu_sample_ms: Some(DEFAULT_CPU_SAMPLE_MS),
            gpu_device_index: Some(0),
            coolant_segment: Some(DEFAULT_COOLANT_SEGMENT.to_string()),
            coolant_label: Some(DEFAULT_COOLANT_LABEL.to_string()),
            shm_dir: Some(DEFAULT_SHM_DIR.to_string()),
        }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// Unset or blank keys stay `None`; malformed numbers are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let cpu_sample_ms = get(ENV_CPU_SAMPLE_MS)
            .map(|v| parse_number(ENV_CPU_SAMPLE_MS, &v))
            .transpose()?;
        let gpu_device_index = get(ENV_GPU_INDEX)
            .map(|v| parse_number(ENV_GPU_INDEX, &v))
            .transpose()?;

        Ok(Self {
            cpu_sample_ms,
            gpu_device_index,
            coolant_segment: get(ENV_COOLANT_SEGMENT),
            coolant_label: get(ENV_COOLANT_LABEL),
            shm_dir: get(ENV_SHM_DIR),
        })
    }

    pub fn effective_cpu_window(&self) -> Duration {
        Duration::from_millis(self.cpu_sample_ms.unwrap_or(DEFAULT_CPU_SAMPLE_MS))
    }

    pub fn effective_gpu_device_index(&self) -> u32 {
        self.gpu_device_index.unwrap_or(0)
    }

    pub fn effective_coolant_segment(&self) -> &str {
        self.coolant_segment
            .as_deref()
            .unwrap_or(DEFAULT_COOLANT_SEGMENT)
    }

    pub fn effective_coolant_label(&self) -> &str {
        self.coolant_label.as_deref().unwrap_or(DEFAULT_COOLANT_LABEL)
    }

    pub fn effective_shm_dir(&self) -> &str {
        self.shm_dir.as_deref().unwrap_or(DEFAULT_SHM_DIR)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, SettingsError> {
    value
        .trim()
        .parse()
        .map_err(|_| SettingsError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("CPU sample window must be between 100 and 10,000 ms, got {0}")]
    InvalidSampleWindow(u64),

    #[error("Coolant segment name cannot be empty")]
    EmptySegmentName,

    #[error("Coolant sensor label cannot be empty")]
    EmptySensorLabel,

    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: String, value: String },
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(ms) = settings.cpu_sample_ms {
        if !(100..=10_000).contains(&ms) {
            return Err(SettingsError::InvalidSampleWindow(ms));
        }
    }

    if let Some(ref segment) = settings.coolant_segment {
        if segment.trim().is_empty() {
            return Err(SettingsError::EmptySegmentName);
        }
    }

    if let Some(ref label) = settings.coolant_label {
        if label.is_empty() {
            return Err(SettingsError::EmptySensorLabel);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.effective_cpu_window(), Duration::from_secs(1));
        assert_eq!(settings.effective_gpu_device_index(), 0);
        assert_eq!(settings.effective_coolant_segment(), DEFAULT_COOLANT_SEGMENT);
        assert_eq!(settings.effective_coolant_label(), "T-Sensor");
        assert_eq!(settings.effective_shm_dir(), "/dev/shm");
    }

    #[test]
    fn test_values_are_read_from_lookup() {
        let settings = Settings::from_lookup(lookup(&[
            (ENV_CPU_SAMPLE_MS, "250"),
            (ENV_GPU_INDEX, " 1 "),
            (ENV_COOLANT_SEGMENT, "Local\\HWiNFO_SENS_SM2"),
            (ENV_COOLANT_LABEL, "Water In"),
            (ENV_SHM_DIR, "/tmp/shm"),
        ]))
        .unwrap();

        assert_eq!(settings.effective_cpu_window(), Duration::from_millis(250));
        assert_eq!(settings.effective_gpu_device_index(), 1);
        assert_eq!(settings.effective_coolant_segment(), "Local\\HWiNFO_SENS_SM2");
        assert_eq!(settings.effective_coolant_label(), "Water In");
        assert_eq!(settings.effective_shm_dir(), "/tmp/shm");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let settings = Settings::from_lookup(lookup(&[(ENV_COOLANT_LABEL, "  ")])).unwrap();
        assert_eq!(settings.coolant_label, None);
    }

    #[test]
    fn test_malformed_number_is_rejected() {
        let err = Settings::from_lookup(lookup(&[(ENV_CPU_SAMPLE_MS, "1s")])).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidNumber { ref key, .. } if key == ENV_CPU_SAMPLE_MS));
    }

    #[test]
    fn test_validate_settings() {
        assert!(validate_settings(&Settings::with_defaults()).is_ok());

        let too_short = Settings {
            cpu_sample_ms: Some(10),
            ..Settings::default()
        };
        assert_eq!(
            validate_settings(&too_short),
            Err(SettingsError::InvalidSampleWindow(10))
        );

        let no_segment = Settings {
            coolant_segment: Some(" ".to_string()),
            ..Settings::default()
        };
        assert_eq!(
            validate_settings(&no_segment),
            Err(SettingsError::EmptySegmentName)
        );

        let no_label = Settings {
            coolant_label: Some(String::new()),
            ..Settings::default()
        };
        assert_eq!(
            validate_settings(&no_label),
            Err(SettingsError::EmptySensorLabel)
        );
    }
}
