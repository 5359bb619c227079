//! Error taxonomy shared by every probe port.

use std::io;

use thiserror::Error;

/// Why a probe could not produce a sample.
///
/// Collectors never let these escape: each is converted into a sentinel
/// value or a per-item marker at the collector boundary. The variants
/// exist so the cause stays visible in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TelemetryError {
    /// The driver, tool or device backing the source is absent.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// The OS refused access to one resource instance.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Externally produced data did not match the expected layout.
    #[error("Malformed telemetry: {0}")]
    MalformedTelemetry(String),
}

impl TelemetryError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::SourceUnavailable(reason.into())
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self::PermissionDenied(reason.into())
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedTelemetry(reason.into())
    }

    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}

impl From<io::Error> for TelemetryError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(err.to_string()),
            _ => Self::SourceUnavailable(err.to_string()),
        }
    }
}

/// Result type for probe operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mapping() {
        let denied: TelemetryError = io::Error::from(io::ErrorKind::PermissionDenied).into();
        assert!(denied.is_permission_denied());

        let missing: TelemetryError = io::Error::from(io::ErrorKind::NotFound).into();
        assert!(matches!(missing, TelemetryError::SourceUnavailable(_)));

        let other: TelemetryError = io::Error::other("stale handle").into();
        assert_eq!(
            other,
            TelemetryError::SourceUnavailable("stale handle".to_string())
        );
    }
}
