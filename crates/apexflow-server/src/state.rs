//! Shared handler state.

use std::sync::Arc;

use apexflow_core::TokenTable;
use apexflow_intent::AutomationParser;
use apexflow_relay::ChatRelay;

use crate::config::ServerConfig;

/// State shared by all handlers. Everything inside is immutable.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    relay: Arc<ChatRelay>,
    tokens: Arc<TokenTable>,
}

impl AppState {
    /// State backed by the builtin token table.
    pub fn new(config: ServerConfig, relay: ChatRelay) -> Self {
        Self::with_tokens(config, relay, TokenTable::builtin().clone())
    }

    pub fn with_tokens(config: ServerConfig, relay: ChatRelay, tokens: TokenTable) -> Self {
        Self {
            config: Arc::new(config),
            relay: Arc::new(relay),
            tokens: Arc::new(tokens),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn relay(&self) -> &ChatRelay {
        &self.relay
    }

    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    pub fn parser(&self) -> AutomationParser<'_> {
        AutomationParser::new(&self.tokens)
    }
}
