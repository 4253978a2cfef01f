//! Compiled extraction rules.
//!
//! Every pattern is a compile-time constant; a failure to compile is a
//! programming error and aborts on first use.

use crate::chain::{PatternChain, Rule};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Keywords that mark a prompt as an automation request. Matched as
/// substrings of the lowercased prompt.
pub const TRIGGER_KEYWORDS: [&str; 9] = [
    "check", "every", "if", "then", "buy", "sell", "when", "automate", "dca",
];

/// Frequency used when no interval phrase is found.
pub const DEFAULT_FREQUENCY: &str = "1h";

/// Percentage used when a price-move condition names no number.
pub const DEFAULT_PERCENT: &str = "10";

/// Window used when a price-move condition names no period.
pub const DEFAULT_PERIOD: &str = "1d";

/// Integer reading of a captured count: leading zeros dropped, zero mapped
/// to one.
///
/// Counts beyond `u64` stay as digit strings rather than float notation.
pub(crate) fn normalized_count(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "1".to_string()
    } else {
        trimmed.to_string()
    }
}

fn count_rule(pattern: &str, suffix: &'static str) -> Rule {
    Rule::new(
        pattern,
        Box::new(move |caps: &Captures<'_>| format!("{}{suffix}", normalized_count(&caps[1]))),
    )
    .unwrap()
}

pub(crate) static FREQUENCY: Lazy<PatternChain> = Lazy::new(|| {
    PatternChain::new(vec![
        count_rule(r"(?i)every\s+([0-9]+)\s*hours?", "h"),
        count_rule(r"(?i)every\s+([0-9]+)\s*minutes?", "m"),
        count_rule(r"(?i)every\s+([0-9]+)\s*days?", "d"),
        Rule::constant(r"(?i)every\s+hour", "1h").unwrap(),
        Rule::constant(r"(?i)every\s+day", "1d").unwrap(),
        Rule::constant(r"(?i)daily", "1d").unwrap(),
    ])
});

/// First run of 2 to 10 uppercase ASCII letters bounded by ASCII word
/// breaks, so a letter like `é` counts as a break.
///
/// Any acronym counts, so "RSI" or "DCA" ahead of the ticker is taken as
/// the asset.
pub(crate) static ASSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)([A-Z]{2,10})(?-u:\b)").unwrap());

pub(crate) static AMOUNT: Lazy<PatternChain> = Lazy::new(|| {
    let dollars = |pattern: &str| {
        Rule::new(pattern, Box::new(|caps: &Captures<'_>| format!("${}", &caps[1]))).unwrap()
    };
    PatternChain::new(vec![
        dollars(r"(?i)\$([0-9]+(?:\.[0-9]+)?)"),
        dollars(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*\$"),
        dollars(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*dollars?"),
    ])
});

pub(crate) static DOWN_PERCENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:down|drop).*?(?:at least|at|least)?\s*([0-9]+)%").unwrap()
});

pub(crate) static UP_PERCENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:up|rise).*?(?:at least|at|least)?\s*([0-9]+)%").unwrap()
});

/// Period rules for a falling-price condition.
pub(crate) static DOWN_PERIOD: Lazy<PatternChain> = Lazy::new(|| {
    PatternChain::new(vec![
        Rule::constant(r"(?i)last\s+day", "1d").unwrap(),
        Rule::capture_with_suffix(r"(?i)last\s+([0-9]+)\s*days?", "d").unwrap(),
        Rule::capture_with_suffix(r"(?i)([0-9]+)\s*days?", "d").unwrap(),
        Rule::capture_with_suffix(r"(?i)([0-9]+)\s*hours?", "h").unwrap(),
        Rule::capture_with_suffix(r"(?i)([0-9]+)\s*minutes?", "m").unwrap(),
        Rule::capture_with_suffix(r"(?i)in\s+([0-9]+[hdm])", "").unwrap(),
    ])
});

/// Period rules for a rising-price condition. Has no minutes rule, so
/// "15 minutes" falls through to the default window.
pub(crate) static UP_PERIOD: Lazy<PatternChain> = Lazy::new(|| {
    PatternChain::new(vec![
        Rule::constant(r"(?i)last\s+day", "1d").unwrap(),
        Rule::capture_with_suffix(r"(?i)last\s+([0-9]+)\s*days?", "d").unwrap(),
        Rule::capture_with_suffix(r"(?i)([0-9]+)\s*days?", "d").unwrap(),
        Rule::capture_with_suffix(r"(?i)([0-9]+)\s*hours?", "h").unwrap(),
        Rule::capture_with_suffix(r"(?i)in\s+([0-9]+[hdm])", "").unwrap(),
    ])
});

pub(crate) static RSI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)rsi.*?(below|above)\s+([0-9]+)").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(FREQUENCY.len(), 6);
        assert_eq!(AMOUNT.len(), 3);
        assert_eq!(DOWN_PERIOD.len(), 6);
        assert_eq!(UP_PERIOD.len(), 5);
        Lazy::force(&ASSET);
        Lazy::force(&DOWN_PERCENT);
        Lazy::force(&UP_PERCENT);
        Lazy::force(&RSI);
    }

    #[test]
    fn test_normalized_count() {
        assert_eq!(normalized_count("4"), "4");
        assert_eq!(normalized_count("007"), "7");
        assert_eq!(
            normalized_count("99999999999999999999999"),
            "99999999999999999999999"
        );
        assert_eq!(normalized_count("0"), "1");
        assert_eq!(normalized_count("000"), "1");
    }

    #[test]
    fn test_frequency_order() {
        assert_eq!(FREQUENCY.first_match("every 15 minutes"), Some("15m".into()));
        assert_eq!(FREQUENCY.first_match("Every Hour"), Some("1h".into()));
        assert_eq!(FREQUENCY.first_match("rebalance DAILY"), Some("1d".into()));
        // The hours rule is tried before the days rule regardless of position.
        assert_eq!(
            FREQUENCY.first_match("every 2 days, or every 3 hours"),
            Some("3h".into())
        );
    }

    #[test]
    fn test_amount_order() {
        assert_eq!(AMOUNT.first_match("spend 20$ then $35.5"), Some("$35.5".into()));
        assert_eq!(AMOUNT.first_match("spend 12.5 dollars"), Some("$12.5".into()));
        assert_eq!(AMOUNT.first_match("spend a lot"), None);
    }

    #[test]
    fn test_period_captures_are_verbatim() {
        assert_eq!(DOWN_PERIOD.first_match("in 4H"), Some("4H".into()));
        assert_eq!(DOWN_PERIOD.first_match("last 03 days"), Some("03d".into()));
    }
}
