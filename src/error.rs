//! Error types for validator configuration.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ValidatorError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    /// A kind set outside the defined range, or not exactly one rule where one is required.
    #[error("Invalid check kind {value:#b}: {reason}")]
    InvalidArgument { value: u32, reason: &'static str },

    /// A repetition or sequence threshold of 1 or less.
    #[error("Invalid value {value} for {setting}: must be greater than 1")]
    InvalidConfiguration { setting: &'static str, value: usize },

    /// An environment override that could not be parsed.
    #[error("Invalid value {value:?} in environment variable {var}")]
    Environment { var: &'static str, value: String },

    /// Async validation was cancelled before it completed.
    #[error("Validation cancelled")]
    Cancelled,
}

impl ValidatorError {
    pub(crate) fn out_of_range(value: u32) -> Self {
        Self::InvalidArgument {
            value,
            reason: "no checks within the given value",
        }
    }

    pub(crate) fn not_single(value: u32) -> Self {
        Self::InvalidArgument {
            value,
            reason: "the check must only contain a single flag",
        }
    }
}
