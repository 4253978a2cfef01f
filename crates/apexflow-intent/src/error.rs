//! Intent parser error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntentError {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type IntentResult<T> = Result<T, IntentError>;
