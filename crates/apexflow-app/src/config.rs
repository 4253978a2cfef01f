//! Application configuration.
//!
//! Load order: `.env`, then the TOML file, then environment overrides.

use crate::error::{AppError, AppResult};
use apexflow_relay::RelayConfig;
use apexflow_server::{Environment, ServerConfig};
use apexflow_telemetry::DEFAULT_LOG_LEVEL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Config file used when neither `--config` nor `APEXFLOW_CONFIG` is set.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration for a run.
    ///
    /// Path precedence: `cli_path` > `APEXFLOW_CONFIG` > `config/default.toml`.
    /// A missing file falls back to defaults. Nothing is logged here; see
    /// `ConfigSource::log` and `warnings`.
    pub fn load(cli_path: Option<&str>) -> AppResult<(Self, ConfigSource)> {
        // A missing .env is normal outside local development.
        let _ = dotenvy::dotenv();

        let config_path = cli_path
            .map(str::to_string)
            .or_else(|| std::env::var("APEXFLOW_CONFIG").ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let (mut config, source) = if Path::new(&config_path).exists() {
            (Self::from_file(&config_path)?, ConfigSource::File(config_path))
        } else {
            (Self::default(), ConfigSource::Defaults(config_path))
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok((config, source))
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Apply `OPENAI_API_KEY`, `CHAT_API_URL`, `PORT` and `APEXFLOW_ENV`.
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = var("OPENAI_API_KEY") {
            self.relay.api_key = Some(key);
        }
        if let Some(url) = var("CHAT_API_URL") {
            self.relay.api_url = url;
        }
        if let Some(port) = var("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("Invalid PORT {port:?}: {e}")))?;
        }
        if let Some(env) = var("APEXFLOW_ENV") {
            self.server.environment = env.parse::<Environment>().map_err(AppError::Config)?;
        }
        Ok(())
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::Config("server.port must be non-zero".to_string()));
        }
        if self.relay.api_url.trim().is_empty() {
            return Err(AppError::Config("relay.api_url must not be empty".to_string()));
        }
        if self.relay.max_tokens == 0 {
            return Err(AppError::Config("relay.max_tokens must be positive".to_string()));
        }
        if !(0.0..=2.0).contains(&self.relay.temperature) {
            return Err(AppError::Config(format!(
                "relay.temperature ({}) must be within 0..=2",
                self.relay.temperature
            )));
        }
        Ok(())
    }

    /// Non-fatal problems worth logging at startup.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.relay.uses_openai() && !self.relay.has_api_key() {
            warnings.push("No OPENAI_API_KEY configured; chat requests will be rejected");
        }
        warnings
    }
}

/// Where `AppConfig::load` found its settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    /// The path that was tried and found missing.
    Defaults(String),
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            Self::File(path) => info!(config_path = %path, "Configuration loaded"),
            Self::Defaults(path) => warn!(path = %path, "Config file not found, using defaults"),
        }
    }
}
