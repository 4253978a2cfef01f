//! Application orchestration.

use crate::config::AppConfig;
use crate::error::AppResult;
use apexflow_core::{validate_symbol, TokenTable};
use apexflow_intent::AutomationParser;
use apexflow_relay::ChatRelay;
use apexflow_server::{run_server, AppState};
use apexflow_telemetry::Metrics;
use serde_json::json;
use tracing::{error, info};

/// Main application.
pub struct Application {
    config: AppConfig,
    tokens: TokenTable,
}

impl Application {
    /// Create a new application backed by the builtin token table.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            tokens: TokenTable::builtin().clone(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse `prompt` and render the result as pretty JSON (`null` when the
    /// prompt is not an automation).
    pub fn parse_prompt(&self, prompt: &str) -> AppResult<String> {
        let automation = AutomationParser::new(&self.tokens).parse(prompt);
        Metrics::intent_parsed(automation.as_ref().map(|a| a.action.as_str()));
        Ok(serde_json::to_string_pretty(&automation)?)
    }

    /// Look up `symbol` and render `{listed, token}` as pretty JSON.
    pub fn describe_token(&self, symbol: &str) -> AppResult<String> {
        let symbol = validate_symbol(symbol)?;
        let body = json!({
            "listed": self.tokens.is_listed(&symbol),
            "token": self.tokens.token_info(&symbol),
        });
        Ok(serde_json::to_string_pretty(&body)?)
    }

    /// Serve the HTTP API until Ctrl-C.
    pub async fn serve(self) -> AppResult<()> {
        let relay = ChatRelay::new(self.config.relay.clone())?;
        let state = AppState::with_tokens(self.config.server.clone(), relay, self.tokens);

        info!(
            api_url = %self.config.relay.api_url,
            model = %self.config.relay.default_model,
            "Chat relay ready"
        );

        run_server(state, shutdown_signal()).await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::Value;

    #[test]
    fn test_parse_prompt_automation() {
        let app = Application::new(AppConfig::default());
        let out = app.parse_prompt("buy $100 of SOL every 4 hours").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["asset"], "SOL");
        assert_eq!(value["frequency"], "4h");
        assert_eq!(value["cost"], 10);
    }

    #[test]
    fn test_parse_prompt_records_metrics() {
        use apexflow_telemetry::metrics::INTENT_ACTION_TOTAL;

        let app = Application::new(AppConfig::default());
        let before = INTENT_ACTION_TOTAL.with_label_values(&["sell"]).get();
        app.parse_prompt("sell WIRE if it drops 20%").unwrap();
        assert_eq!(
            INTENT_ACTION_TOTAL.with_label_values(&["sell"]).get(),
            before + 1.0
        );
    }

    #[test]
    fn test_parse_prompt_chat_is_null() {
        let app = Application::new(AppConfig::default());
        assert_eq!(app.parse_prompt("good morning").unwrap(), "null");
    }

    #[test]
    fn test_describe_token() {
        let app = Application::new(AppConfig::default());
        let value: Value = serde_json::from_str(&app.describe_token("wire").unwrap()).unwrap();
        assert_eq!(value["listed"], true);
        assert_eq!(value["token"]["symbol"], "WIRE");

        let err = app.describe_token("$$$").unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn test_serve_fails_when_port_taken() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = taken.local_addr().unwrap().port();
        let app = Application::new(config);

        let err = tokio_test::block_on(app.serve()).unwrap_err();
        assert!(matches!(err, AppError::Server(_)));
    }
}
