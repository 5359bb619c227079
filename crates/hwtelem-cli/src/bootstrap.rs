//! CLI bootstrap - the composition root.
//!
//! Settings are read from the environment and validated, then the real
//! host probes are wired into a `TelemetryService` via `hwtelem-runtime`.
//! Handlers only ever see the resulting [`CliContext`].

use std::sync::Arc;
use std::time::Duration;

use hwtelem_core::{Settings, TelemetryService, validate_settings};
use hwtelem_runtime::build_service;
use tracing::debug;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: Settings,
    /// Per-section deadline; `None` waits for as long as sampling takes.
    pub timeout: Option<Duration>,
}

impl CliConfig {
    /// Read settings from `HWTELEM_*` variables and validate them.
    pub fn from_env(timeout_secs: Option<u64>) -> Result<Self, CliError> {
        let settings = Settings::from_env()?;
        Self::new(settings, timeout_secs)
    }

    pub fn new(settings: Settings, timeout_secs: Option<u64>) -> Result<Self, CliError> {
        validate_settings(&settings)?;
        if timeout_secs == Some(0) {
            return Err(CliError::Config(
                "--timeout-secs must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            settings,
            timeout: timeout_secs.map(Duration::from_secs),
        })
    }
}

/// Fully composed context for CLI commands.
#[derive(Clone)]
pub struct CliContext {
    pub service: Arc<TelemetryService>,
    pub settings: Settings,
    pub timeout: Option<Duration>,
}

/// Wire the host probes into a service.
pub fn bootstrap(config: CliConfig) -> CliContext {
    debug!(settings = ?config.settings, timeout = ?config.timeout, "bootstrapping");
    let service = build_service(&config.settings);
    CliContext {
        service: Arc::new(service),
        settings: config.settings,
        timeout: config.timeout,
    }
}
