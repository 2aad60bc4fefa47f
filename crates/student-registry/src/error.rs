use crate::config::ConfigError;
use crate::registry::RegistryError;
use crate::telemetry::TelemetryError;

/// Failures on the bootstrap path (configuration, telemetry, binding,
/// serving). Request-path failures are [`crate::registry::RegistryError`]
/// and are mapped to responses inside the router.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}
