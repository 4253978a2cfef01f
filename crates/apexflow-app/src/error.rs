//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Relay error: {0}")]
    Relay(#[from] apexflow_relay::RelayError),

    #[error("Server error: {0}")]
    Server(#[from] apexflow_server::ServerError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] apexflow_telemetry::TelemetryError),

    #[error("Invalid input: {0}")]
    Input(#[from] apexflow_core::CoreError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
