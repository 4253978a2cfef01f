//! ApexFlow assistant application.
//!
//! Wires configuration, logging, the chat relay and the HTTP server, and
//! exposes the parser and token directory to the command line.

pub mod app;
pub mod config;
pub mod error;

pub use app::Application;
pub use config::{AppConfig, ConfigSource, TelemetryConfig, DEFAULT_CONFIG_PATH};
pub use error::{AppError, AppResult};
