//! Rolling-window volatility estimator.

use crate::error::EstimatorError;
use crate::traits::{EstimatorParams, EstimatorSpec, VolatilityEstimator};
use vega_types::{ReturnPoint, ReturnSeries, VolPoint, VolatilitySeries};

/// Rolling-window volatility
///
/// Annualized sample standard deviation (ddof=1) of log returns over a
/// fixed trailing window, matching pandas `rolling(window).std()` semantics.
/// The first `window - 1` outputs are NaN; a window containing any
/// non-finite return yields NaN for that timestamp instead of a corrupted
/// number.
#[derive(Debug, Clone)]
pub struct RollingVolatility {
    window: usize,
    annualization: f64,
}

impl RollingVolatility {
    /// Creates a rolling estimator.
    ///
    /// # Errors
    /// [`EstimatorError::ParamOutOfRange`] when `window` is zero or
    /// `annualization` is not finite and positive.
    pub fn new(window: usize, annualization: f64) -> Result<Self, EstimatorError> {
        if window == 0 {
            return Err(EstimatorError::param_out_of_range(
                "window",
                0.0,
                1.0,
                f64::INFINITY,
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
            window,
            annualization,
        })
    }

    /// Window length in observations.
    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }
}

impl VolatilityEstimator for RollingVolatility {
    fn compute(&self, returns: &ReturnSeries) -> VolatilitySeries {
        let points = returns.points();
        let len = points.len();
        let mut values = vec![f64::NAN; len];

        if len >= self.window {
            let scale = self.annualization.sqrt();
            for i in (self.window - 1)..len {
                let start = i + 1 - self.window;
                values[i] = window_stdev(&points[start..=i]) * scale;
            }
        }

        let out = points
            .iter()
            .zip(values)
            .map(|(p, value)| VolPoint {
                timestamp_ns: p.timestamp_ns,
                value,
            })
            .collect();
        VolatilitySeries::new(self.spec().label(), out)
    }

    fn spec(&self) -> EstimatorSpec {
        EstimatorSpec::new(
            "rolling",
            EstimatorParams::Rolling {
                window: self.window,
                periods_x100: EstimatorParams::encode_x100(self.annualization),
            },
        )
    }

    fn warmup_periods(&self) -> usize {
        self.window
    }
}

/// Sample standard deviation of a return window, NaN when the window is
/// corrupt (non-finite member) or too short for ddof=1.
fn window_stdev(window: &[ReturnPoint]) -> f64 {
    if window.iter().any(|p| !p.value.is_finite()) {
        return f64::NAN;
    }

    #[allow(clippy::cast_precision_loss)]
    let n = window.len() as f64;
    let denom = n - 1.0;
    if denom <= 0.0 {
        return f64::NAN;
    }

    let mean = window.iter().map(|p| p.value).sum::<f64>() / n;
    let variance = window
        .iter()
        .map(|p| (p.value - mean).powi(2))
        .sum::<f64>()
        / denom;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vega_types::{PricePoint, PriceSeries};

    const DAY_NS: i64 = 86_400_000_000_000;

    fn daily_returns(prices: &[f64]) -> ReturnSeries {
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                timestamp_ns: i as i64 * DAY_NS,
                price,
            })
            .collect();
        let series = PriceSeries::new(points).unwrap();
        ReturnSeries::from_prices(&series).unwrap()
    }

    fn raw_returns(values: &[f64]) -> ReturnSeries {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &value)| ReturnPoint {
                timestamp_ns: i as i64 * DAY_NS,
                value,
            })
            .collect();
        ReturnSeries::from_points(points).unwrap()
    }

    fn stdev(values: &[f64]) -> f64 {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    }

    #[test]
    fn test_six_price_scenario() {
        // 6 daily prices -> 5 returns; window 3, no annualization:
        // indices 0 and 1 undefined, defined from index 2 onward.
        let returns = daily_returns(&[100.0, 101.0, 99.0, 102.0, 98.0, 105.0]);
        let est = RollingVolatility::new(3, 1.0).unwrap();
        let vol = est.compute(&returns);

        assert_eq!(vol.len(), 5);
        assert_eq!(vol.value_at(0), None);
        assert_eq!(vol.value_at(1), None);
        for i in 2..5 {
            let value = vol.value_at(i).unwrap();
            assert!(value >= 0.0);
        }

        // Index 2 is the stdev of the first three log returns
        let r: Vec<f64> = returns.points().iter().map(|p| p.value).collect();
        let expected = stdev(&r[0..3]);
        assert!((vol.value_at(2).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_full_window_matches_direct_stdev() {
        let returns = daily_returns(&[100.0, 101.0, 99.0, 102.0, 98.0, 105.0]);
        let est = RollingVolatility::new(returns.len(), 1.0).unwrap();
        let vol = est.compute(&returns);

        let r: Vec<f64> = returns.points().iter().map(|p| p.value).collect();
        let expected = stdev(&r);

        let last = vol.value_at(returns.len() - 1).unwrap();
        assert!((last - expected).abs() < 1e-12);
        // Everything before the last index is warmup
        for i in 0..(returns.len() - 1) {
            assert_eq!(vol.value_at(i), None);
        }
    }

    #[test]
    fn test_annualization_scales_by_sqrt() {
        let returns = daily_returns(&[100.0, 101.0, 99.0, 102.0]);
        let plain = RollingVolatility::new(3, 1.0).unwrap().compute(&returns);
        let annualized = RollingVolatility::new(3, 252.0).unwrap().compute(&returns);

        let expected = plain.value_at(2).unwrap() * 252f64.sqrt();
        assert!((annualized.value_at(2).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_window_longer_than_series_is_all_undefined() {
        let returns = daily_returns(&[100.0, 101.0, 99.0]);
        let vol = RollingVolatility::new(10, 1.0).unwrap().compute(&returns);
        assert_eq!(vol.len(), 2);
        assert_eq!(vol.defined_count(), 0);
    }

    #[test]
    fn test_window_one_is_all_undefined() {
        // Sample stdev of a single observation is undefined (pandas parity)
        let returns = daily_returns(&[100.0, 101.0, 99.0, 102.0]);
        let vol = RollingVolatility::new(1, 1.0).unwrap().compute(&returns);
        assert_eq!(vol.defined_count(), 0);
    }

    #[test]
    fn test_corrupt_window_yields_undefined_not_garbage() {
        let returns = raw_returns(&[0.01, f64::NAN, -0.02, 0.015, 0.01]);
        let vol = RollingVolatility::new(2, 1.0).unwrap().compute(&returns);

        // Windows touching the NaN return are undefined
        assert_eq!(vol.value_at(1), None);
        assert_eq!(vol.value_at(2), None);
        // Windows past it recover
        assert!(vol.value_at(3).is_some());
        assert!(vol.value_at(4).is_some());
    }

    #[test]
    fn test_timestamps_align_to_returns() {
        let returns = daily_returns(&[100.0, 101.0, 99.0, 102.0]);
        let vol = RollingVolatility::new(2, 1.0).unwrap().compute(&returns);
        for (vp, rp) in vol.points().iter().zip(returns.points()) {
            assert_eq!(vp.timestamp_ns, rp.timestamp_ns);
        }
    }

    #[test]
    fn test_compute_strict_raises_on_short_series() {
        let returns = daily_returns(&[100.0, 101.0, 99.0]);
        let est = RollingVolatility::new(10, 1.0).unwrap();

        let err = est.compute_strict(&returns).unwrap_err();
        assert!(matches!(
            err,
            EstimatorError::InsufficientData {
                required: 10,
                actual: 2
            }
        ));

        // With enough data it behaves like compute
        let est = RollingVolatility::new(2, 1.0).unwrap();
        let vol = est.compute_strict(&returns).unwrap();
        assert!(vol.value_at(1).is_some());
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert!(matches!(
            RollingVolatility::new(0, 1.0),
            Err(EstimatorError::ParamOutOfRange { .. })
        ));
        assert!(matches!(
            RollingVolatility::new(20, 0.0),
            Err(EstimatorError::ParamOutOfRange { .. })
        ));
        assert!(matches!(
            RollingVolatility::new(20, f64::NAN),
            Err(EstimatorError::ParamOutOfRange { .. })
        ));
    }

    #[test]
    fn test_spec_label() {
        let est = RollingVolatility::new(20, 252.0).unwrap();
        assert_eq!(est.spec().label(), "rolling-20");
        assert_eq!(est.warmup_periods(), 20);
    }
}
