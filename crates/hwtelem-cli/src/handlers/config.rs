//! Config command handler.
//!
//! Displays the settings the service was built with, defaults applied, in
//! `key = value` format.

use hwtelem_core::Settings;

use crate::bootstrap::CliContext;

/// Execute the config command.
pub fn execute(ctx: &CliContext) {
    print!("{}", render(&ctx.settings, ctx.timeout.map(|t| t.as_secs())));
}

fn render(settings: &Settings, timeout_secs: Option<u64>) -> String {
    let timeout = timeout_secs.map_or_else(|| "none".to_string(), |secs| secs.to_string());
    format!(
        "cpu_sample_ms = {}\n\
         gpu_device_index = {}\n\
         coolant_segment = {}\n\
         coolant_label = {}\n\
         shm_dir = {}\n\
         timeout_secs = {timeout}\n",
        settings.effective_cpu_window().as_millis(),
        settings.effective_gpu_device_index(),
        settings.effective_coolant_segment(),
        settings.effective_coolant_label(),
        settings.effective_shm_dir(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_applies_defaults() {
        let text = render(&Settings::default(), None);
        assert!(text.contains("cpu_sample_ms = 1000\n"));
        assert!(text.contains("coolant_segment = Global\\HWiNFO_SENS_SM2\n"));
        assert!(text.contains("coolant_label = T-Sensor\n"));
        assert!(text.ends_with("timeout_secs = none\n"));
    }

    #[test]
    fn test_render_overrides() {
        let settings = Settings {
            gpu_device_index: Some(2),
            coolant_label: Some("Water In".to_string()),
            ..Settings::default()
        };
        let text = render(&settings, Some(10));
        assert!(text.contains("gpu_device_index = 2\n"));
        assert!(text.contains("coolant_label = Water In\n"));
        assert!(text.contains("timeout_secs = 10\n"));
    }
}
