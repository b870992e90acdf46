//! Series-level error types.

use thiserror::Error;

/// Errors raised while constructing or deriving series.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// No data points were supplied.
    #[error("empty series")]
    Empty,

    /// Timestamps are not strictly increasing.
    #[error("non-monotonic timestamp at index {index}: {timestamp_ns} <= {prev_ns}")]
    NonMonotonicTimestamp {
        /// Index of the offending point.
        index: usize,
        /// Timestamp at the offending index.
        timestamp_ns: i64,
        /// Timestamp of the preceding point.
        prev_ns: i64,
    },

    /// A price is zero or negative.
    #[error("non-positive price at index {index}: {price}")]
    NonPositivePrice {
        /// Index of the offending point.
        index: usize,
        /// The offending price.
        price: f64,
    },

    /// A price is NaN or infinite.
    #[error("non-finite price at index {index}")]
    NonFinitePrice {
        /// Index of the offending point.
        index: usize,
    },

    /// Not enough observations for the requested derivation.
    #[error("insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Required number of observations.
        required: usize,
        /// Available number of observations.
        available: usize,
    },

    /// Parallel input columns differ in length.
    #[error("column length mismatch: {left} != {right}")]
    LengthMismatch {
        /// Length of the first column.
        left: usize,
        /// Length of the second column.
        right: usize,
    },
}
