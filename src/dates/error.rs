use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("Invalid date bound '{input}': {reason}")]
    InvalidDateFormat { input: String, reason: &'static str },

    #[error("Could not interpret {0} as a calendar date")]
    InvalidDate(String),
}
