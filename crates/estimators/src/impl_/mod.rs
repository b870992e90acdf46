//! Estimator implementations
//!
//! Contains all concrete volatility estimator implementations.

pub mod ewma;
pub mod rolling;
