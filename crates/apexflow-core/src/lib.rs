//! Core domain types for the ApexFlow trading assistant.
//!
//! This crate provides the reference data and records shared by the
//! parser, the relay server and the CLI:
//! - `TokenInfo`, `TokenTable`: Static token directory with placeholder fallback
//! - `AutomationDetails`, `Action`: Structured automation intents
//! - `Price`, `Volume`: Precision-safe numeric types
//! - Deterministic placeholder address synthesis

pub mod address;
pub mod automation;
pub mod decimal;
pub mod error;
pub mod token;
pub mod tokens;

pub use address::{listing_placeholder_address, placeholder_address};
pub use automation::{Action, AutomationDetails, AUTOMATION_COST, BASE_CURRENCY, UNKNOWN_ASSET};
pub use decimal::{Price, Volume};
pub use error::{CoreError, Result};
pub use token::{TokenInfo, TrendingCoin};
pub use tokens::{trending_coins, validate_symbol, TokenTable};
