//! HTTP client for the upstream chat-completion API.
//!
//! One POST per call: no retry, no queueing, no deduplication. Concurrent
//! calls are independent requests over reqwest's connection pool.

use crate::config::RelayConfig;
use crate::error::{RelayError, RelayResult};
use crate::message::{extract_reply, ChatMessage, ChatRequest, NO_REPLY_FALLBACK};
use apexflow_telemetry::Metrics;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Body sent upstream.
#[derive(Debug, Serialize)]
struct UpstreamRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
    stream: bool,
}

/// Chat relay client.
#[derive(Debug, Clone)]
pub struct ChatRelay {
    client: Client,
    config: RelayConfig,
}

impl ChatRelay {
    /// Create a relay for `config`.
    pub fn new(config: RelayConfig) -> RelayResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RelayError::HttpClient(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Forward `request` upstream and return its JSON unmodified.
    pub async fn forward(&self, request: &ChatRequest) -> RelayResult<Value> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);
        let uses_openai = self.config.uses_openai();

        info!(
            message_count = request.messages.len(),
            model,
            api_url = %self.config.api_url,
            has_api_key = self.config.has_api_key(),
            "New chat request received"
        );

        if uses_openai && !self.config.has_api_key() {
            error!("Missing OPENAI_API_KEY for OpenAI upstream");
            Metrics::relay_rejected();
            return Err(RelayError::MissingApiKey);
        }

        if request.messages.is_empty() {
            Metrics::relay_rejected();
            return Err(RelayError::EmptyMessages);
        }

        let body = UpstreamRequest {
            model,
            messages: &request.messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stream: false,
        };

        let mut http = self.client.post(&self.config.api_url).json(&body);
        if uses_openai {
            if let Some(key) = self.config.api_key.as_deref() {
                http = http.bearer_auth(key);
            }
        }

        let started = Instant::now();
        let inflight = Metrics::relay_inflight();
        let result = self.send(http).await;
        drop(inflight);
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        match &result {
            Ok(_) => {
                info!(latency_ms, "Chat response successful");
                Metrics::relay_request("ok", latency_ms);
            }
            Err(e) => Metrics::relay_request(e.outcome(), latency_ms),
        }
        result
    }

    /// Forward `messages` with the default model and return the reply text.
    pub async fn complete(&self, messages: &[ChatMessage]) -> RelayResult<String> {
        self.reply(&ChatRequest::new(messages.to_vec())).await
    }

    /// Forward `request` and return the reply text.
    ///
    /// An upstream answer with no recognizable text yields
    /// `NO_REPLY_FALLBACK`.
    pub async fn reply(&self, request: &ChatRequest) -> RelayResult<String> {
        let data = self.forward(request).await?;
        Ok(extract_reply(&data).unwrap_or_else(|| {
            debug!("Upstream response carried no reply text");
            NO_REPLY_FALLBACK.to_string()
        }))
    }

    async fn send(&self, http: reqwest::RequestBuilder) -> RelayResult<Value> {
        let response = http.send().await.map_err(|e| {
            error!(error = %e, "Chat request failed");
            RelayError::Transport(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::Transport(format!("Failed to read response: {e}")))?;

        let data: Value = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(_) => {
                let err = RelayError::invalid_response(&text);
                if let RelayError::InvalidResponse { raw } = &err {
                    warn!(status = status.as_u16(), raw = %raw, "Chat API returned non-JSON response");
                }
                return Err(err);
            }
        };

        if !status.is_success() {
            let code = status.as_u16();
            match code {
                401 => error!(status = code, "Authentication failed, check API key"),
                429 => error!(status = code, "Rate limit exceeded"),
                _ => error!(status = code, body = %data, "Chat API error"),
            }
            return Err(upstream_error(code, &data));
        }

        Ok(data)
    }
}

/// Classify a non-2xx upstream JSON body.
fn upstream_error(status: u16, data: &Value) -> RelayError {
    let error = data.get("error");
    let message = error
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .or_else(|| error.and_then(Value::as_str))
        .unwrap_or("Chat API error")
        .to_string();
    let error_type = error
        .and_then(|e| e.get("type"))
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    RelayError::Upstream {
        status,
        message,
        error_type,
    }
}
