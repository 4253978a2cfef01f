//! Token reference records.

use crate::decimal::{Price, Volume};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Descriptive record for a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Uppercased ticker.
    pub symbol: String,
    pub name: String,
    /// Chain address, or a synthesized placeholder for unlisted tickers.
    pub address: String,
    pub price: Price,
    /// Signed 24h change in percent.
    #[serde(rename = "change24h")]
    pub change_24h: Decimal,
    #[serde(rename = "volume24h")]
    pub volume_24h: Volume,
}

/// Entry of the trending-coins leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingCoin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: Price,
    #[serde(rename = "change24h")]
    pub change_24h: Decimal,
    #[serde(rename = "volume24h")]
    pub volume_24h: Volume,
    pub market_cap: Volume,
    /// 1-based leaderboard position.
    pub rank: u32,
}
