//! apexflow-server - HTTP API for the ApexFlow assistant.
//!
//! - `POST /api/assistant`: parser first, chat relay second
//! - `POST /api/chat`: relay pass-through
//! - Token, trending and story endpoints backed by demo data
//! - Health and Prometheus metrics
//!
//! # Usage
//!
//! ```ignore
//! use apexflow_server::{run_server, AppState, ServerConfig};
//!
//! let relay = ChatRelay::new(RelayConfig::default())?;
//! let state = AppState::new(ServerConfig::default(), relay);
//! run_server(state, shutdown_signal()).await?;
//! ```

mod config;
mod cors;
mod dispatch;
mod error;
mod server;
mod state;

pub use config::{Environment, ServerConfig, DEFAULT_ALLOWED_ORIGINS};
pub use cors::{cors_layer, origin_allowed};
pub use dispatch::{dispatch, AssistantReply};
pub use error::{ServerError, ServerResult};
pub use server::{create_router, run_server, ParseResponse, TokenResponse};
pub use state::AppState;
