//! Structured automation intents extracted from chat input.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quote currency every automation settles in.
pub const BASE_CURRENCY: &str = "USDC";

/// Credits charged per automation. Not derived from the action.
pub const AUTOMATION_COST: u32 = 10;

/// Asset reported when no ticker-shaped token is found.
pub const UNKNOWN_ASSET: &str = "UNKNOWN";

/// Trade direction of an automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Buy,
    Sell,
    Swap,
}

impl Action {
    /// Capitalised verb used in summaries.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
            Self::Swap => "Swap",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Swap => "swap",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            "swap" => Ok(Self::Swap),
            other => Err(CoreError::InvalidAction(other.to_string())),
        }
    }
}

/// Automation record produced by the intent parser.
///
/// Built fresh per parse and never mutated afterwards; callers hold it only
/// until the user confirms or dismisses the automation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationDetails {
    /// Human-readable description of the action.
    pub summary: String,
    /// Interval token such as "1h", "4h", "1d" or "30m".
    pub frequency: String,
    pub base_currency: String,
    /// Ticker, or "UNKNOWN".
    pub asset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_address: Option<String>,
    pub cost: u32,
    pub action: Action,
    /// Spend amount formatted as "$N".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Trigger clause such as "down 10% in 1d" or "RSI below 30".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl AutomationDetails {
    /// Whether the automation waits on a trigger clause.
    pub fn is_conditional(&self) -> bool {
        self.condition.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_verbs() {
        assert_eq!(Action::Buy.verb(), "Buy");
        assert_eq!(Action::Sell.verb(), "Sell");
        assert_eq!(Action::Swap.verb(), "Swap");
    }

    #[test]
    fn test_action_from_str() {
        assert_eq!("SELL".parse::<Action>().unwrap(), Action::Sell);
        assert_eq!(" swap ".parse::<Action>().unwrap(), Action::Swap);
        assert!(matches!(
            "hold".parse::<Action>(),
            Err(CoreError::InvalidAction(s)) if s == "hold"
        ));
    }

    #[test]
    fn test_details_serialize_camel_case() {
        let details = AutomationDetails {
            summary: "Buy $50 of APEX".to_string(),
            frequency: "1d".to_string(),
            base_currency: BASE_CURRENCY.to_string(),
            asset: "APEX".to_string(),
            asset_address: Some("0x4A7E...B2F1".to_string()),
            cost: AUTOMATION_COST,
            action: Action::Buy,
            amount: Some("$50".to_string()),
            condition: None,
        };

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["baseCurrency"], "USDC");
        assert_eq!(json["assetAddress"], "0x4A7E...B2F1");
        assert_eq!(json["action"], "buy");
        assert_eq!(json["cost"], 10);
        assert!(json.get("condition").is_none());
        assert!(!details.is_conditional());
    }
}
