//! Natural-language automation intent parser.
//!
//! Extracts asset, frequency, amount, action and trigger condition from
//! free-text chat input using ordered regex rules:
//! - `AutomationParser`: parser bound to a token table
//! - `PatternChain`: first-match-wins rule driver

pub mod chain;
pub mod error;
pub mod parser;
pub mod rules;

pub use chain::{Extractor, PatternChain, Rule};
pub use error::{IntentError, IntentResult};
pub use parser::{is_automation, parse_automation, AutomationParser};
pub use rules::{DEFAULT_FREQUENCY, TRIGGER_KEYWORDS};
