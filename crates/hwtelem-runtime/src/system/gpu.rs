//! NVIDIA GPU temperature and utilisation.
//!
//! NVML is tried first. When the library cannot be loaded (e.g. the driver
//! ships only the CLI tools), `nvidia-smi` is queried instead. Either path
//! returns a complete sample or an error; a half-read device is an error.

use std::process::Command;

use hwtelem_core::{GpuProbePort, GpuSample, TelemetryError, TelemetryResult};
use nvml_wrapper::Nvml;
use nvml_wrapper::enum_wrappers::device::TemperatureSensor;
use nvml_wrapper::error::NvmlError;
use tracing::debug;

/// Queries the NVIDIA driver afresh on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NvidiaGpuProbe;

impl NvidiaGpuProbe {
    pub const fn new() -> Self {
        Self
    }
}

impl GpuProbePort for NvidiaGpuProbe {
    fn sample(&self, device_index: u32) -> TelemetryResult<GpuSample> {
        match sample_nvml(device_index) {
            Ok(sample) => Ok(sample),
            Err(nvml_err) => {
                debug!(error = %nvml_err, "NVML query failed, trying nvidia-smi");
                // Report the NVML cause; it is the primary binding
                sample_nvidia_smi(device_index).map_err(|_| nvml_err)
            }
        }
    }
}

fn sample_nvml(device_index: u32) -> TelemetryResult<GpuSample> {
    let nvml = Nvml::init().map_err(|e| nvml_error("init", &e))?;
    let device = nvml
        .device_by_index(device_index)
        .map_err(|e| nvml_error("device handle", &e))?;
    let temperature_c = device
        .temperature(TemperatureSensor::Gpu)
        .map_err(|e| nvml_error("temperature", &e))?;
    let utilization_pct = device
        .utilization_rates()
        .map_err(|e| nvml_error("utilization", &e))?
        .gpu;

    Ok(GpuSample {
        temperature_c,
        utilization_pct,
    })
}

fn nvml_error(step: &str, err: &NvmlError) -> TelemetryError {
    match err {
        NvmlError::NoPermission => TelemetryError::denied(format!("NVML {step}: {err}")),
        _ => TelemetryError::unavailable(format!("NVML {step}: {err}")),
    }
}

fn sample_nvidia_smi(device_index: u32) -> TelemetryResult<GpuSample> {
    let output = Command::new("nvidia-smi")
        .args([
            "--query-gpu=temperature.gpu,utilization.gpu",
            "--format=csv,noheader,nounits",
            "-i",
            &device_index.to_string(),
        ])
        .output()?;

    if !output.status.success() {
        return Err(TelemetryError::unavailable(format!(
            "nvidia-smi exited with {}",
            output.status
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_smi_line(stdout.lines().next().unwrap_or_default())
}

/// Parse `"<temperature>, <utilisation>"` as printed by nvidia-smi.
fn parse_smi_line(line: &str) -> TelemetryResult<GpuSample> {
    let mut fields = line.split(',').map(str::trim);
    let mut next = |name: &str| -> TelemetryResult<u32> {
        fields
            .next()
            .and_then(|field| field.parse().ok())
            .ok_or_else(|| TelemetryError::malformed(format!("nvidia-smi {name}: {line:?}")))
    };

    let temperature_c = next("temperature")?;
    let utilization_pct = next("utilization")?;
    Ok(GpuSample {
        temperature_c,
        utilization_pct,
    })
}
