//! Relay error types.
//!
//! Every variant maps to an HTTP status and JSON body for pass-through
//! callers, and to an assistant-style message for chat callers. None of
//! them is fatal to the process.

use crate::message::ChatMessage;
use serde_json::{json, Value};
use thiserror::Error;

/// Longest upstream body kept in an `InvalidResponse`.
pub const RAW_DISPLAY_LIMIT: usize = 1000;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing API key")]
    MissingApiKey,

    #[error("Messages array is required")]
    EmptyMessages,

    #[error("Chat API error {status}: {message}")]
    Upstream {
        status: u16,
        message: String,
        error_type: String,
    },

    #[error("Invalid response from chat API")]
    InvalidResponse { raw: String },

    #[error("Chat request failed: {0}")]
    Transport(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

pub type RelayResult<T> = Result<T, RelayError>;

impl RelayError {
    /// Build an `InvalidResponse`, truncating `raw` for display.
    pub fn invalid_response(raw: &str) -> Self {
        Self::InvalidResponse {
            raw: raw.chars().take(RAW_DISPLAY_LIMIT).collect(),
        }
    }

    /// HTTP status reported to relay callers.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingApiKey => 500,
            Self::EmptyMessages => 400,
            Self::Upstream { status, .. } => *status,
            Self::InvalidResponse { .. } => 502,
            Self::Transport(_) | Self::HttpClient(_) => 500,
        }
    }

    /// Metric label for this failure.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::MissingApiKey | Self::EmptyMessages => "rejected",
            Self::Upstream { .. } => "upstream_error",
            Self::InvalidResponse { .. } => "invalid_response",
            Self::Transport(_) | Self::HttpClient(_) => "transport_error",
        }
    }

    /// JSON error body reported to relay callers.
    pub fn to_body(&self) -> Value {
        match self {
            Self::MissingApiKey => json!({
                "error": "Missing API key",
                "message": "Set OPENAI_API_KEY in the server environment or .env file.",
            }),
            Self::EmptyMessages => json!({ "error": "Messages array is required" }),
            Self::Upstream {
                status,
                message,
                error_type,
            } => json!({
                "error": message,
                "type": error_type,
                "status": status,
            }),
            Self::InvalidResponse { raw } => json!({
                "error": "Invalid response from chat API",
                "raw": raw,
            }),
            Self::Transport(detail) | Self::HttpClient(detail) => json!({
                "error": "Chat request failed",
                "detail": detail,
            }),
        }
    }

    /// Assistant turn describing the failure, for rendering in a chat
    /// thread in place of a reply.
    pub fn as_assistant_message(&self) -> ChatMessage {
        let text = match self {
            Self::MissingApiKey => {
                "The assistant is not configured yet: the server has no API key.".to_string()
            }
            Self::EmptyMessages => "There was no message to send.".to_string(),
            Self::Upstream {
                status, message, ..
            } => format!("The assistant service returned an error ({status}): {message}"),
            Self::InvalidResponse { .. } => {
                "The assistant service sent a response I could not read. Please try again."
                    .to_string()
            }
            Self::Transport(_) | Self::HttpClient(_) => {
                "I could not reach the assistant service. Please try again.".to_string()
            }
        };
        ChatMessage::assistant(text)
    }
}
