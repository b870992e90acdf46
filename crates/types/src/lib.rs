//! Vega Types
//!
//! Core data structures for the vega volatility toolkit.
//! This crate provides validated price and log-return series, volatility
//! series with explicit undefined markers, macro event records, and the
//! study configuration.

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod event;
pub mod series;
pub mod volatility;

// Re-export main types for convenience
pub use config::StudyConfig;
pub use error::SeriesError;
pub use event::MacroEvent;
pub use series::{PricePoint, PriceSeries, ReturnPoint, ReturnSeries};
pub use volatility::{VolPoint, VolatilitySeries};
