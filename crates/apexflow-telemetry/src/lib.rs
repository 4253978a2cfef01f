//! Prometheus metrics and structured logging for ApexFlow.
//!
//! - Prometheus metrics for the chat relay, intent parser and HTTP routes
//! - Structured logging with tracing (JSON in production)

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, DEFAULT_LOG_LEVEL};
pub use metrics::{InflightGuard, Metrics};
