//! Prometheus metrics for ApexFlow.
//!
//! Covers:
//! - Chat relay outcomes and latency
//! - Intent parser hits and classified actions
//! - HTTP route traffic
//!
//! # Panics
//!
//! Metric registration uses `unwrap()`. A registration failure means a
//! duplicate metric name, which is a fatal startup error. These panics only
//! occur during static initialization, never at runtime.

use crate::error::TelemetryResult;
use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram, register_int_gauge, CounterVec, Encoder,
    Histogram, IntGauge, TextEncoder,
};

/// Total relay calls.
/// Labels: outcome (ok/upstream_error/invalid_response/transport_error/rejected)
pub static RELAY_REQUESTS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "apexflow_relay_requests_total",
        "Total chat relay requests by outcome",
        &["outcome"]
    )
    .unwrap()
});

/// Upstream round-trip latency in milliseconds.
pub static RELAY_LATENCY_MS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "apexflow_relay_latency_ms",
        "Chat relay upstream latency in milliseconds",
        vec![50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0, 30000.0, 60000.0]
    )
    .unwrap()
});

/// Relay calls currently waiting on the upstream.
pub static RELAY_INFLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        "apexflow_relay_inflight",
        "Chat relay requests awaiting an upstream response"
    )
    .unwrap()
});

/// Parser invocations.
/// Labels: result (automation/chat)
pub static INTENT_PARSE_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "apexflow_intent_parse_total",
        "Total intent parser invocations by result",
        &["result"]
    )
    .unwrap()
});

/// Parsed automations by action.
pub static INTENT_ACTION_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "apexflow_intent_action_total",
        "Parsed automations by action",
        &["action"]
    )
    .unwrap()
});

/// HTTP requests by route.
pub static HTTP_REQUESTS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "apexflow_http_requests_total",
        "Total HTTP requests by route",
        &["route"]
    )
    .unwrap()
});

/// Metrics helper for recording values.
pub struct Metrics;

/// Holds one slot of `apexflow_relay_inflight`.
///
/// Released on drop, including when the owning future is cancelled.
#[must_use = "the call counts as in flight only while the guard lives"]
pub struct InflightGuard {
    _private: (),
}

impl Drop for InflightGuard {
    fn drop(&mut self) {
        RELAY_INFLIGHT.dec();
    }
}

impl Metrics {
    /// Record a finished relay call.
    pub fn relay_request(outcome: &str, latency_ms: f64) {
        RELAY_REQUESTS_TOTAL.with_label_values(&[outcome]).inc();
        RELAY_LATENCY_MS.observe(latency_ms);
    }

    /// Record a relay call rejected before reaching the upstream.
    pub fn relay_rejected() {
        RELAY_REQUESTS_TOTAL.with_label_values(&["rejected"]).inc();
    }

    /// Mark a relay call as in flight until the returned guard drops.
    pub fn relay_inflight() -> InflightGuard {
        RELAY_INFLIGHT.inc();
        InflightGuard { _private: () }
    }

    /// Relay calls currently in flight.
    pub fn relay_inflight_count() -> i64 {
        RELAY_INFLIGHT.get()
    }

    /// Record a parser run. `action` is set when an automation was found.
    pub fn intent_parsed(action: Option<&str>) {
        match action {
            Some(action) => {
                INTENT_PARSE_TOTAL.with_label_values(&["automation"]).inc();
                INTENT_ACTION_TOTAL.with_label_values(&[action]).inc();
            }
            None => INTENT_PARSE_TOTAL.with_label_values(&["chat"]).inc(),
        }
    }

    /// Record an HTTP request.
    pub fn http_request(route: &str) {
        HTTP_REQUESTS_TOTAL.with_label_values(&[route]).inc();
    }

    /// Render the default registry in the Prometheus text format.
    pub fn gather_text() -> TelemetryResult<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&prometheus::gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Content type of `gather_text` output.
    pub fn content_type() -> &'static str {
        prometheus::TEXT_FORMAT
    }
}
