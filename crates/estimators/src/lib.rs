//! Vega Estimators
//!
//! Volatility estimation engine for the vega toolkit.
//! Turns a log-return series into volatility series under different
//! estimator configurations.
//!
//! # Features
//! - `VolatilityEstimator` trait with whole-series computation
//! - Multi-window rolling computation on a shared timestamp axis
//! - Caching system for computed series
//! - Registry for estimator factories
//!
//! # Available Estimators
//! - Rolling: annualized sample standard deviation over a trailing window
//! - EWMA: exponentially weighted volatility with configurable decay
//!
//! New measures (GARCH, regime switching) plug in through the trait and
//! registry without touching event alignment or summarization.

pub mod cache;
pub mod error;
pub mod impl_;
pub mod multi;
pub mod registry;
pub mod traits;

// Re-export main types
pub use cache::EstimatorCache;
pub use error::EstimatorError;
pub use multi::multi_window;
pub use registry::EstimatorRegistry;
pub use traits::{EstimatorParams, EstimatorSpec, VolatilityEstimator};

// Re-export estimator implementations
pub use impl_::{ewma::EwmaVolatility, rolling::RollingVolatility};
