//! Multi-window rolling computation.

use crate::impl_::rolling::RollingVolatility;
use crate::traits::VolatilityEstimator;
use vega_types::{ReturnSeries, VolPoint, VolatilitySeries};

/// Computes rolling volatility for several window lengths over one return
/// series.
///
/// Windows are independent and share the return timestamp axis. A window
/// that cannot be computed at all (zero length, or invalid annualization)
/// surfaces as an all-undefined series under its label instead of aborting
/// the remaining windows; a window merely longer than the series produces
/// the same all-undefined result through the estimator itself. Callers that
/// need a hard error for one specific window should construct
/// [`RollingVolatility`] directly.
#[must_use]
pub fn multi_window(
    returns: &ReturnSeries,
    windows: &[usize],
    annualization: f64,
) -> Vec<VolatilitySeries> {
    windows
        .iter()
        .map(
            |&window| match RollingVolatility::new(window, annualization) {
                Ok(est) => est.compute(returns),
                Err(_) => undefined_series(format!("rolling-{window}"), returns),
            },
        )
        .collect()
}

fn undefined_series(label: String, returns: &ReturnSeries) -> VolatilitySeries {
    let points = returns
        .points()
        .iter()
        .map(|p| VolPoint {
            timestamp_ns: p.timestamp_ns,
            value: f64::NAN,
        })
        .collect();
    VolatilitySeries::new(label, points)
}
