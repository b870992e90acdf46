//! Estimator error types.

use thiserror::Error;

/// Errors that can occur during estimator construction or registry
/// operations.
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// Unknown estimator name requested from registry
    #[error("unknown estimator: {0}")]
    UnknownEstimator(String),

    /// Invalid parameters for the estimator
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Parameter out of valid range
    #[error("parameter out of range: {param} = {value} (valid: {min}..{max})")]
    ParamOutOfRange {
        /// Parameter name.
        param: String,
        /// Parameter value.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// Insufficient data for computation
    #[error("insufficient data: need {required} returns, got {actual}")]
    InsufficientData {
        /// Required number of returns.
        required: usize,
        /// Actual number of returns provided.
        actual: usize,
    },
}

impl EstimatorError {
    /// Creates an `InvalidParams` error with a message.
    #[must_use]
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        EstimatorError::InvalidParams(msg.into())
    }

    /// Creates a `ParamOutOfRange` error.
    #[must_use]
    pub fn param_out_of_range(param: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        EstimatorError::ParamOutOfRange {
            param: param.into(),
            value,
            min,
            max,
        }
    }
}
