//! Estimator traits and specifications.
//!
//! Defines the core trait and identification types for volatility
//! estimators.

use crate::error::EstimatorError;
use vega_types::{ReturnSeries, VolatilitySeries};

/// Specification for an estimator including name and parameters.
/// Used as cache keys to identify computed volatility series.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EstimatorSpec {
    /// Estimator name ("rolling", "ewma").
    pub name: String,
    /// Parameters for the estimator
    pub params: EstimatorParams,
}

impl EstimatorSpec {
    /// Creates a new estimator specification.
    #[must_use]
    pub fn new(name: impl Into<String>, params: EstimatorParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Human-readable series label, e.g. `rolling-20` or `ewma-0.94`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.params {
            EstimatorParams::Rolling { window, .. } => {
                format!("{name}-{window}", name = self.name)
            }
            EstimatorParams::Ewma { lambda_x100, .. } => {
                format!(
                    "{name}-{lambda:.2}",
                    name = self.name,
                    lambda = EstimatorParams::decode_x100(lambda_x100)
                )
            }
        }
    }
}

/// Parameters for estimator configuration.
/// Uses integer representations (x100) for hashability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstimatorParams {
    /// Rolling-window parameters
    Rolling {
        /// Window length in observations.
        window: usize,
        /// Annualization periods per year * 100 (e.g. 25200 = 252.0).
        periods_x100: u32,
    },

    /// EWMA parameters
    Ewma {
        /// Decay factor * 100 (e.g. 94 = 0.94).
        lambda_x100: u32,
        /// Annualization periods per year * 100.
        periods_x100: u32,
    },
}

impl EstimatorParams {
    /// Encodes a real parameter into its x100 integer representation.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn encode_x100(value: f64) -> u32 {
        (value * 100.0).round() as u32
    }

    /// Decodes an x100 integer representation back to a real parameter.
    #[must_use]
    pub fn decode_x100(encoded: u32) -> f64 {
        f64::from(encoded) / 100.0
    }
}

/// Trait for volatility estimators.
///
/// Estimators compute over the full return series and return a
/// [`VolatilitySeries`] of the same length, aligned to the return
/// timestamps. Values before the warmup period are NaN.
pub trait VolatilityEstimator: Send + Sync {
    /// Computes the volatility series for all returns.
    fn compute(&self, returns: &ReturnSeries) -> VolatilitySeries;

    /// Specification identifying this estimator configuration.
    fn spec(&self) -> EstimatorSpec;

    /// Minimum number of observations required for defined output.
    fn warmup_periods(&self) -> usize;

    /// Computes the series, failing when no partial result is possible.
    ///
    /// For callers that requested exactly this one configuration, an
    /// all-undefined result is useless; this variant raises instead when
    /// the series is shorter than the warmup period. Multi-configuration
    /// callers should use [`VolatilityEstimator::compute`], where the
    /// shortfall surfaces as undefined values without aborting sibling
    /// configurations.
    ///
    /// # Errors
    /// [`EstimatorError::InsufficientData`] when `returns` is shorter than
    /// [`VolatilityEstimator::warmup_periods`].
    fn compute_strict(&self, returns: &ReturnSeries) -> Result<VolatilitySeries, EstimatorError> {
        if returns.len() < self.warmup_periods() {
            return Err(EstimatorError::InsufficientData {
                required: self.warmup_periods(),
                actual: returns.len(),
            });
        }
        Ok(self.compute(returns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_rolling_label() {
        let spec = EstimatorSpec::new(
            "rolling",
            EstimatorParams::Rolling {
                window: 20,
                periods_x100: 25_200,
            },
        );
        assert_eq!(spec.label(), "rolling-20");
    }

    #[test]
    fn test_ewma_label() {
        let spec = EstimatorSpec::new(
            "ewma",
            EstimatorParams::Ewma {
                lambda_x100: 94,
                periods_x100: 25_200,
            },
        );
        assert_eq!(spec.label(), "ewma-0.94");
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        assert_eq!(EstimatorParams::encode_x100(0.94), 94);
        assert_eq!(EstimatorParams::encode_x100(252.0), 25_200);
        assert!((EstimatorParams::decode_x100(94) - 0.94).abs() < 1e-12);
        assert!((EstimatorParams::decode_x100(25_200) - 252.0).abs() < 1e-12);
    }

    #[test]
    fn test_spec_hash_equality() {
        let p1 = EstimatorParams::Rolling {
            window: 20,
            periods_x100: 100,
        };
        let p2 = EstimatorParams::Rolling {
            window: 20,
            periods_x100: 100,
        };
        let p3 = EstimatorParams::Rolling {
            window: 60,
            periods_x100: 100,
        };

        assert_eq!(p1, p2);
        assert_ne!(p1, p3);

        let mut map = HashMap::new();
        map.insert(EstimatorSpec::new("rolling", p1), "value");
        assert!(map.contains_key(&EstimatorSpec::new("rolling", p2)));
        assert!(!map.contains_key(&EstimatorSpec::new("rolling", p3)));
    }
}
