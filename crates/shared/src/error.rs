//! Toolkit-wide error types.

use thiserror::Error;

/// Result type alias using `CommonsError`.
pub type CommonsResult<T> = Result<T, CommonsError>;

/// Errors produced by the tally utility crates.
#[derive(Debug, Error)]
pub enum CommonsError {
    /// Input could not be parsed into the expected shape.
    #[error("Cannot parse '{input}'. Expecting {expected}.")]
    Parse {
        /// The offending input.
        input: String,
        /// Human-readable description of the accepted format.
        expected: &'static str,
    },

    /// An argument was outside the accepted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CommonsError {
    /// Builds a parse error for the given input and expected format.
    #[must_use]
    pub fn parse(input: impl Into<String>, expected: &'static str) -> Self {
        Self::Parse {
            input: input.into(),
            expected,
        }
    }
}
