//! Chat relay for ApexFlow.
//!
//! Forwards a message list to one upstream chat-completion endpoint and
//! returns the upstream JSON or a classified error:
//! - `ChatRelay`: single-attempt HTTP client
//! - `extract_reply`: tolerant reply extraction (OpenAI and Gemini shapes)
//! - `RelayError`: failures mapped to HTTP status and assistant messages

pub mod client;
pub mod config;
pub mod error;
pub mod message;

pub use client::ChatRelay;
pub use config::{RelayConfig, DEFAULT_API_URL, DEFAULT_MODEL};
pub use error::{RelayError, RelayResult};
pub use message::{extract_reply, ChatMessage, ChatRequest, Role, NO_REPLY_FALLBACK};
