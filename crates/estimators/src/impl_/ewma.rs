//! EWMA volatility estimator.

use crate::error::EstimatorError;
use crate::traits::{EstimatorParams, EstimatorSpec, VolatilityEstimator};
use vega_types::{ReturnSeries, VolPoint, VolatilitySeries};

/// Exponentially weighted moving-average volatility
///
/// RiskMetrics-style recursive variance update:
/// `var_t = lambda * var_{t-1} + (1 - lambda) * r_t^2`, seeded with the
/// first finite squared return. Captures shocks faster than rolling-window
/// estimators because recent returns carry exponentially more weight.
///
/// Unlike rolling estimators there is no warmup gap: every point from the
/// seed onward is defined. The seed itself is a single-observation estimate
/// and is exposed through the series' low-confidence prefix rather than
/// being silently treated as equal-quality.
#[derive(Debug, Clone)]
pub struct EwmaVolatility {
    lambda: f64,
    annualization: f64,
}

impl EwmaVolatility {
    /// Creates an EWMA estimator.
    ///
    /// # Errors
    /// [`EstimatorError::ParamOutOfRange`] when `lambda` is outside (0, 1)
    /// exclusive or `annualization` is not finite and positive.
    pub fn new(lambda: f64, annualization: f64) -> Result<Self, EstimatorError> {
        if !lambda.is_finite() || lambda <= 0.0 || lambda >= 1.0 {
            return Err(EstimatorError::param_out_of_range(
                "lambda", lambda, 0.0, 1.0,
            ));
        }
        if !annualization.is_finite() || annualization <= 0.0 {
            return Err(EstimatorError::param_out_of_range(
                "annualization",
                annualization,
                f64::MIN_POSITIVE,
                f64::MAX,
            ));
        }
        Ok(Self {
            lambda,
            annualization,
        })
    }

    /// Decay factor.
    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl VolatilityEstimator for EwmaVolatility {
    fn compute(&self, returns: &ReturnSeries) -> VolatilitySeries {
        let points = returns.points();
        let len = points.len();
        let mut values = vec![f64::NAN; len];
        let scale = self.annualization.sqrt();

        let seed_idx = points.iter().position(|p| p.value.is_finite());
        let mut low_confidence = 0;

        if let Some(seed_idx) = seed_idx {
            let mut variance = points[seed_idx].value.powi(2);
            values[seed_idx] = variance.sqrt() * scale;

            for i in (seed_idx + 1)..len {
                let r = points[i].value;
                if r.is_finite() {
                    variance = self.lambda * variance + (1.0 - self.lambda) * r * r;
                }
                // Non-finite return: variance carries forward unchanged
                values[i] = variance.sqrt() * scale;
            }

            low_confidence = seed_idx + 1;
        }

        let out = points
            .iter()
            .zip(values)
            .map(|(p, value)| VolPoint {
                timestamp_ns: p.timestamp_ns,
                value,
            })
            .collect();
        VolatilitySeries::new(self.spec().label(), out).with_low_confidence(low_confidence)
    }

    fn spec(&self) -> EstimatorSpec {
        EstimatorSpec::new(
            "ewma",
            EstimatorParams::Ewma {
                lambda_x100: EstimatorParams::encode_x100(self.lambda),
                periods_x100: EstimatorParams::encode_x100(self.annualization),
            },
        )
    }

    fn warmup_periods(&self) -> usize {
        1
    }
}
