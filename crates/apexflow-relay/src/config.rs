//! Relay configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Upstream used when none is configured.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model sent when the request names none.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Chat relay configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Chat-completion endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bearer token. Required only for OpenAI upstreams.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds. Unset leaves only transport errors.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    4000
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            default_model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: None,
        }
    }
}

impl RelayConfig {
    /// OpenAI upstreams need a bearer token; other gateways do not.
    pub fn uses_openai(&self) -> bool {
        self.api_url.contains("openai.com")
    }

    /// Whether a non-empty API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("default_model", &self.default_model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
