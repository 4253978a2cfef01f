//! Ordered regex rules evaluated first-match-wins.
//!
//! A chain is a list of `(pattern, extractor)` pairs. The driver tries each
//! pattern in declaration order against the whole haystack and returns the
//! extractor's output for the first pattern that matches anywhere. Order is
//! significant: a later, more specific pattern never overrides an earlier
//! match.

use crate::error::IntentResult;
use regex::{Captures, Regex};
use std::fmt;

/// Turns the captures of a matched rule into the extracted value.
pub type Extractor = Box<dyn Fn(&Captures<'_>) -> String + Send + Sync>;

/// Single rule of a chain.
pub struct Rule {
    pattern: Regex,
    extract: Extractor,
}

impl Rule {
    pub fn new(pattern: &str, extract: Extractor) -> IntentResult<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            extract,
        })
    }

    /// Rule that always yields `value` when it matches.
    pub fn constant(pattern: &str, value: &'static str) -> IntentResult<Self> {
        Self::new(pattern, Box::new(move |_: &Captures<'_>| value.to_string()))
    }

    /// Rule that yields capture group 1 with `suffix` appended.
    pub fn capture_with_suffix(pattern: &str, suffix: &'static str) -> IntentResult<Self> {
        Self::new(pattern, Box::new(move |caps: &Captures<'_>| format!("{}{suffix}", &caps[1])))
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    fn apply(&self, haystack: &str) -> Option<String> {
        self.pattern
            .captures(haystack)
            .map(|caps| (self.extract)(&caps))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// Ordered list of rules with a first-match driver.
#[derive(Debug, Default)]
pub struct PatternChain {
    rules: Vec<Rule>,
}

impl PatternChain {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Output of the first rule whose pattern matches `haystack`.
    pub fn first_match(&self, haystack: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.apply(haystack))
    }

    /// Same as `first_match`, falling back to `default`.
    pub fn first_match_or(&self, haystack: &str, default: &str) -> String {
        self.first_match(haystack)
            .unwrap_or_else(|| default.to_string())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> PatternChain {
        PatternChain::new(vec![
            Rule::capture_with_suffix(r"(?i)([0-9]+)\s*days?", "d").unwrap(),
            Rule::constant(r"(?i)weekly", "7d").unwrap(),
            Rule::capture_with_suffix(r"(?i)([0-9]+)\s*hours?", "h").unwrap(),
        ])
    }

    #[test]
    fn test_first_rule_in_order_wins() {
        // Hours appear first in the text, but the day rule is declared first.
        assert_eq!(chain().first_match("6 hours or 2 days"), Some("2d".to_string()));
    }

    #[test]
    fn test_constant_rule() {
        assert_eq!(chain().first_match("run it WEEKLY"), Some("7d".to_string()));
    }

    #[test]
    fn test_no_match_uses_default() {
        assert_eq!(chain().first_match("nothing here"), None);
        assert_eq!(chain().first_match_or("nothing here", "1h"), "1h");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        assert!(Rule::constant("(unclosed", "x").is_err());
    }

    #[test]
    fn test_patterns_listed_in_order() {
        let c = chain();
        assert_eq!(c.len(), 3);
        assert_eq!(c.patterns().next(), Some(r"(?i)([0-9]+)\s*days?"));
    }
}
