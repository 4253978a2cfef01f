//! Server error types.

use apexflow_core::CoreError;
use apexflow_relay::RelayError;
use apexflow_telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Relay(#[from] RelayError),

    #[error("Bad request: {0}")]
    BadRequest(#[from] CoreError),

    #[error("Metrics unavailable: {0}")]
    Metrics(#[from] TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Relay(e) => (
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                e.to_body(),
            ),
            Self::BadRequest(e) => (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() })),
            Self::Metrics(_) | Self::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
