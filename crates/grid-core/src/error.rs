// File: crates/grid-core/src/error.rs
// Summary: Error taxonomy for validation and dataset encoding.

use rust_decimal::Decimal;
use thiserror::Error;

/// Caller-side input problems. Surfaced before any resampling work is done.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("input contains no samples")]
    Empty,
    #[error("x values must be strictly ascending: sample {index} has x = {current} after {previous}")]
    NotAscending {
        index: usize,
        previous: Decimal,
        current: Decimal,
    },
    /// NaN or infinite float handed to a conversion helper.
    #[error("value {0} is not finite")]
    NonFinite(String),
    #[error("value {0} does not fit the decimal range")]
    OutOfRange(String),
    #[error("cannot parse `{input}` as a decimal: {reason}")]
    Parse { input: String, reason: String },
    #[error("grid would hold {rows} rows, limit is {limit}")]
    GridTooDense { rows: u128, limit: usize },
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("failed to encode dataset: {0}")]
    Encode(#[from] serde_json::Error),
}

impl GridError {
    /// The validation failure behind this error, if any.
    pub fn invalid_input(&self) -> Option<&InvalidInput> {
        match self {
            GridError::InvalidInput(e) => Some(e),
            GridError::Encode(_) => None,
        }
    }
}
