//! Automation intent parser.
//!
//! Turns a free-text chat prompt into an `AutomationDetails` record, or
//! `None` when the prompt does not read as an automation request. Parsing
//! is pure and synchronous: no I/O, no clock, no shared mutable state.

use crate::chain::PatternChain;
use crate::rules::{
    AMOUNT, ASSET, DEFAULT_FREQUENCY, DEFAULT_PERCENT, DEFAULT_PERIOD, DOWN_PERCENT, DOWN_PERIOD,
    FREQUENCY, RSI, TRIGGER_KEYWORDS, UP_PERCENT, UP_PERIOD,
};
use apexflow_core::{
    placeholder_address, Action, AutomationDetails, TokenTable, AUTOMATION_COST, BASE_CURRENCY,
    UNKNOWN_ASSET,
};
use regex::Regex;
use tracing::debug;

/// Automation intent parser bound to a token table.
#[derive(Debug, Clone, Copy)]
pub struct AutomationParser<'a> {
    tokens: &'a TokenTable,
}

impl Default for AutomationParser<'static> {
    fn default() -> Self {
        Self::new(TokenTable::builtin())
    }
}

impl<'a> AutomationParser<'a> {
    pub fn new(tokens: &'a TokenTable) -> Self {
        Self { tokens }
    }

    /// Parse `prompt` into an automation.
    ///
    /// Returns `None` only when no trigger keyword is present. Every other
    /// field falls back to a default, so a returned record is always
    /// complete.
    pub fn parse(&self, prompt: &str) -> Option<AutomationDetails> {
        let lower = prompt.to_lowercase();

        if !is_automation(&lower) {
            debug!(prompt_len = prompt.len(), "No automation trigger keyword");
            return None;
        }

        let frequency = FREQUENCY.first_match_or(prompt, DEFAULT_FREQUENCY);
        let asset = extract_asset(prompt);
        let asset_address = self.resolve_address(&asset);
        let amount = AMOUNT.first_match(prompt);
        let action = classify_action(&lower);
        let condition = extract_condition(prompt, &lower);
        let summary = summarize(action, &asset, amount.as_deref(), condition.as_deref());

        debug!(
            asset = %asset,
            frequency = %frequency,
            action = %action,
            conditional = condition.is_some(),
            "Parsed automation intent"
        );

        Some(AutomationDetails {
            summary,
            frequency,
            base_currency: BASE_CURRENCY.to_string(),
            asset,
            asset_address: Some(asset_address),
            cost: AUTOMATION_COST,
            action,
            amount,
            condition,
        })
    }

    /// Listed address for `asset`, or its deterministic placeholder.
    fn resolve_address(&self, asset: &str) -> String {
        match self.tokens.get(asset) {
            Some(info) => info.address.clone(),
            None => placeholder_address(asset),
        }
    }
}

/// Parse `prompt` against the builtin token table.
pub fn parse_automation(prompt: &str) -> Option<AutomationDetails> {
    AutomationParser::default().parse(prompt)
}

/// Whether the lowercased prompt contains any trigger keyword.
pub fn is_automation(lower: &str) -> bool {
    TRIGGER_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn extract_asset(prompt: &str) -> String {
    ASSET
        .captures(prompt)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| UNKNOWN_ASSET.to_string())
}

/// Sell overrides buy; swap overrides both.
fn classify_action(lower: &str) -> Action {
    let mut action = Action::Buy;
    if lower.contains("sell") {
        action = Action::Sell;
    }
    if lower.contains("swap") {
        action = Action::Swap;
    }
    action
}

fn extract_condition(prompt: &str, lower: &str) -> Option<String> {
    if lower.contains("down") || lower.contains("drop") {
        Some(price_move("down", prompt, &DOWN_PERCENT, &DOWN_PERIOD))
    } else if lower.contains("up") || lower.contains("rise") {
        Some(price_move("up", prompt, &UP_PERCENT, &UP_PERIOD))
    } else if lower.contains("rsi") {
        RSI.captures(prompt)
            .map(|caps| format!("RSI {} {}", &caps[1], &caps[2]))
    } else {
        None
    }
}

fn price_move(direction: &str, prompt: &str, percent: &Regex, period: &PatternChain) -> String {
    let pct = percent
        .captures(prompt)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| DEFAULT_PERCENT.to_string());
    let window = period.first_match_or(prompt, DEFAULT_PERIOD);
    format!("{direction} {pct}% in {window}")
}

fn summarize(action: Action, asset: &str, amount: Option<&str>, condition: Option<&str>) -> String {
    let verb = action.verb();
    match (condition, amount) {
        (Some(condition), _) => format!("{verb} {asset} when {condition}"),
        (None, Some(amount)) => format!("{verb} {amount} of {asset}"),
        (None, None) => format!("{verb} {asset}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apexflow_core::{Price, TokenInfo, Volume};

    #[test]
    fn test_no_trigger_keyword_returns_none() {
        assert!(parse_automation("hello there").is_none());
        assert!(parse_automation("").is_none());
        assert!(parse_automation("What is the price of SOL?").is_none());
    }

    #[test]
    fn test_dca_prompt_extracts_acronym_first() {
        let details =
            parse_automation("Automate DCA 50$ of APEX every day. Stop after spending 1000$")
                .unwrap();

        assert_eq!(details.frequency, "1d");
        // First uppercase run wins, even when it is not a ticker.
        assert_eq!(details.asset, "DCA");
        assert_eq!(details.amount.as_deref(), Some("$50"));
        assert_eq!(details.action, Action::Buy);
        assert_eq!(details.condition, None);
        assert_eq!(details.summary, "Buy $50 of DCA");
        assert_eq!(
            details.asset_address.as_deref(),
            Some(placeholder_address("DCA").as_str())
        );
    }

    #[test]
    fn test_price_drop_prompt() {
        let details = parse_automation(
            "Check every 4 hours if WIRE is down at least 10% last day, then buy 500$",
        )
        .unwrap();

        assert_eq!(details.frequency, "4h");
        assert_eq!(details.asset, "WIRE");
        assert_eq!(details.asset_address.as_deref(), Some("0x0b3A...AeE0"));
        assert_eq!(details.action, Action::Buy);
        assert_eq!(details.amount.as_deref(), Some("$500"));
        assert_eq!(details.condition.as_deref(), Some("down 10% in 1d"));
        assert_eq!(details.summary, "Buy WIRE when down 10% in 1d");
        assert_eq!(details.base_currency, "USDC");
        assert_eq!(details.cost, 10);
    }

    #[test]
    fn test_rsi_prompt() {
        let details = parse_automation("If 15min RSI on FACY is below 30, buy it").unwrap();

        assert_eq!(details.asset, "RSI");
        assert_eq!(details.condition.as_deref(), Some("RSI below 30"));
        assert_eq!(details.frequency, "1h");
        assert_eq!(details.amount, None);
        assert_eq!(details.summary, "Buy RSI when RSI below 30");
    }

    #[test]
    fn test_rsi_without_threshold_has_no_condition() {
        let details = parse_automation("buy SOL when RSI looks good").unwrap();
        assert_eq!(details.asset, "SOL");
        assert_eq!(details.condition, None);
        assert_eq!(details.summary, "Buy SOL");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let prompt = "Sell BEAST every 30 minutes when it drops 25% in 2h";
        assert_eq!(parse_automation(prompt), parse_automation(prompt));
    }

    #[test]
    fn test_swap_wins_over_sell() {
        let details = parse_automation("sell or swap my SOL daily").unwrap();
        assert_eq!(details.action, Action::Swap);
        assert_eq!(details.summary, "Swap SOL");
        assert_eq!(details.frequency, "1d");
    }

    #[test]
    fn test_sell_action() {
        let details = parse_automation("sell $20.5 of WETH every hour").unwrap();
        assert_eq!(details.action, Action::Sell);
        assert_eq!(details.amount.as_deref(), Some("$20.5"));
        assert_eq!(details.summary, "Sell $20.5 of WETH");
        assert_eq!(details.frequency, "1h");
    }

    #[test]
    fn test_down_branch_reads_minutes() {
        let details = parse_automation("buy SOL if it is down 20% in 15 minutes").unwrap();
        assert_eq!(details.condition.as_deref(), Some("down 20% in 15m"));
    }

    #[test]
    fn test_up_branch_ignores_minutes() {
        let details = parse_automation("Sell SOL if it is up 20% in 15 minutes").unwrap();
        assert_eq!(details.condition.as_deref(), Some("up 20% in 1d"));
        assert_eq!(details.summary, "Sell SOL when up 20% in 1d");
    }

    #[test]
    fn test_price_move_defaults() {
        let details = parse_automation("buy APEX when it starts to rise").unwrap();
        assert_eq!(details.condition.as_deref(), Some("up 10% in 1d"));
    }

    #[test]
    fn test_zero_and_padded_counts() {
        assert_eq!(parse_automation("buy SOL every 0 hours").unwrap().frequency, "1h");
        assert_eq!(parse_automation("buy SOL every 05 minutes").unwrap().frequency, "5m");
        assert_eq!(parse_automation("buy SOL every 3 days").unwrap().frequency, "3d");
    }

    #[test]
    fn test_unknown_asset_default() {
        let details = parse_automation("buy something every day").unwrap();
        assert_eq!(details.asset, "UNKNOWN");
        assert_eq!(
            details.asset_address.as_deref(),
            Some("0x00000230...0230AeE0")
        );
    }

    #[test]
    fn test_ticker_after_non_ascii_letter() {
        assert_eq!(parse_automation("buy éSOL daily").unwrap().asset, "SOL");
        assert_eq!(parse_automation("buy ÉTH daily").unwrap().asset, "TH");
    }

    #[test]
    fn test_lowercase_ticker_is_not_an_asset() {
        let details = parse_automation("buy sol every day").unwrap();
        assert_eq!(details.asset, "UNKNOWN");
    }

    #[test]
    fn test_unlisted_asset_gets_placeholder_address() {
        let details = parse_automation("buy XYZ daily").unwrap();
        assert_eq!(details.asset, "XYZ");
        assert_eq!(details.asset_address.as_deref(), Some("0x0000010b...010BAeE0"));
    }

    #[test]
    fn test_custom_token_table() {
        let table = TokenTable::new(vec![TokenInfo {
            symbol: "XYZ".to_string(),
            name: "Xyz Token".to_string(),
            address: "0xfeed".to_string(),
            price: Price::ZERO,
            change_24h: Default::default(),
            volume_24h: Volume::ZERO,
        }]);
        let parser = AutomationParser::new(&table);

        let details = parser.parse("buy XYZ daily").unwrap();
        assert_eq!(details.asset_address.as_deref(), Some("0xfeed"));
        // Builtin tickers are unknown to a custom table.
        let details = parser.parse("buy WIRE daily").unwrap();
        assert_eq!(details.asset_address, Some(placeholder_address("WIRE")));
    }

    #[test]
    fn test_trigger_keyword_inside_word() {
        // "if" inside "gift" is enough to pass the gate.
        assert!(parse_automation("a gift for you").is_some());
    }

    #[test]
    fn test_serializes_for_clients() {
        let details = parse_automation("buy SOL daily").unwrap();
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["summary"], "Buy SOL");
        assert_eq!(json["assetAddress"], "So11111111111111111111111111111111111111112");
        assert!(json.get("amount").is_none());
    }
}
