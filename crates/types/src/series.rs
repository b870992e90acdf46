//! Price and log-return series.

use crate::error::SeriesError;

/// A single observed price.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PricePoint {
    /// Unix epoch nanoseconds UTC
    pub timestamp_ns: i64,
    /// Observed price, finite and > 0
    pub price: f64,
}

/// Validated price series.
///
/// Timestamps are strictly increasing, prices are finite and positive.
/// Immutable once constructed: malformed input is rejected here so that no
/// downstream statistic is ever computed from corrupt data.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates a validated price series.
    ///
    /// # Errors
    /// - [`SeriesError::Empty`] when `points` is empty.
    /// - [`SeriesError::NonFinitePrice`] when a price is NaN or infinite.
    /// - [`SeriesError::NonPositivePrice`] when a price is <= 0.
    /// - [`SeriesError::NonMonotonicTimestamp`] when timestamps are not
    ///   strictly increasing.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        if points.is_empty() {
            return Err(SeriesError::Empty);
        }

        for (i, point) in points.iter().enumerate() {
            if !point.price.is_finite() {
                return Err(SeriesError::NonFinitePrice { index: i });
            }
            if point.price <= 0.0 {
                return Err(SeriesError::NonPositivePrice {
                    index: i,
                    price: point.price,
                });
            }
            if i > 0 && point.timestamp_ns <= points[i - 1].timestamp_ns {
                return Err(SeriesError::NonMonotonicTimestamp {
                    index: i,
                    timestamp_ns: point.timestamp_ns,
                    prev_ns: points[i - 1].timestamp_ns,
                });
            }
        }

        Ok(Self { points })
    }

    /// Builds a series from parallel timestamp/price columns.
    ///
    /// # Errors
    /// [`SeriesError::LengthMismatch`] when the columns differ in length,
    /// plus everything [`PriceSeries::new`] rejects.
    pub fn from_columns(timestamps_ns: &[i64], prices: &[f64]) -> Result<Self, SeriesError> {
        if timestamps_ns.len() != prices.len() {
            return Err(SeriesError::LengthMismatch {
                left: timestamps_ns.len(),
                right: prices.len(),
            });
        }

        let points = timestamps_ns
            .iter()
            .zip(prices.iter())
            .map(|(&timestamp_ns, &price)| PricePoint {
                timestamp_ns,
                price,
            })
            .collect();
        Self::new(points)
    }

    /// Returns the number of price observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the series is empty (never, post-construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the observations.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }
}

/// A single log return.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReturnPoint {
    /// Unix epoch nanoseconds UTC of the later of the two prices
    pub timestamp_ns: i64,
    /// ln(price[t] / price[t-1]); NaN marks an undefined observation
    pub value: f64,
}

/// Log-return series.
///
/// Derived from a [`PriceSeries`] (always one observation shorter than its
/// source) or supplied directly by a collaborator that already works in
/// return space. Return values may be NaN to mark undefined observations;
/// estimators treat those per their own undefined-value policy.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReturnSeries {
    points: Vec<ReturnPoint>,
}

impl ReturnSeries {
    /// Derives log returns from a price series.
    ///
    /// Each return is stamped with the timestamp of the later price, so the
    /// return series aligns to "information available at t".
    ///
    /// # Errors
    /// [`SeriesError::InsufficientData`] when the price series has fewer
    /// than 2 points.
    pub fn from_prices(prices: &PriceSeries) -> Result<Self, SeriesError> {
        if prices.len() < 2 {
            return Err(SeriesError::InsufficientData {
                required: 2,
                available: prices.len(),
            });
        }

        let points = prices
            .points()
            .windows(2)
            .map(|pair| ReturnPoint {
                timestamp_ns: pair[1].timestamp_ns,
                value: (pair[1].price / pair[0].price).ln(),
            })
            .collect();

        Ok(Self { points })
    }

    /// Builds a return series from raw points.
    ///
    /// Values are not validated (NaN is a legal undefined marker), but
    /// timestamps must be strictly increasing.
    ///
    /// # Errors
    /// - [`SeriesError::Empty`] when `points` is empty.
    /// - [`SeriesError::NonMonotonicTimestamp`] when timestamps are not
    ///   strictly increasing.
    pub fn from_points(points: Vec<ReturnPoint>) -> Result<Self, SeriesError> {
        if points.is_empty() {
            return Err(SeriesError::Empty);
        }
        for (i, point) in points.iter().enumerate() {
            if i > 0 && point.timestamp_ns <= points[i - 1].timestamp_ns {
                return Err(SeriesError::NonMonotonicTimestamp {
                    index: i,
                    timestamp_ns: point.timestamp_ns,
                    prev_ns: points[i - 1].timestamp_ns,
                });
            }
        }
        Ok(Self { points })
    }

    /// Returns the number of return observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the series is empty (never, post-construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the observations.
    #[must_use]
    pub fn points(&self) -> &[ReturnPoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_points(prices: &[f64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                timestamp_ns: i as i64 * 86_400_000_000_000,
                price,
            })
            .collect()
    }

    #[test]
    fn test_price_series_accepts_valid_input() {
        let series = PriceSeries::new(daily_points(&[100.0, 101.0, 99.0])).unwrap();
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_price_series_rejects_empty() {
        let err = PriceSeries::new(vec![]).unwrap_err();
        assert!(matches!(err, SeriesError::Empty));
    }

    #[test]
    fn test_price_series_rejects_non_positive_price() {
        let err = PriceSeries::new(daily_points(&[100.0, 0.0])).unwrap_err();
        assert!(matches!(err, SeriesError::NonPositivePrice { index: 1, .. }));

        let err = PriceSeries::new(daily_points(&[100.0, -3.0])).unwrap_err();
        assert!(matches!(err, SeriesError::NonPositivePrice { index: 1, .. }));
    }

    #[test]
    fn test_price_series_rejects_nan_price() {
        let err = PriceSeries::new(daily_points(&[100.0, f64::NAN])).unwrap_err();
        assert!(matches!(err, SeriesError::NonFinitePrice { index: 1 }));
    }

    #[test]
    fn test_price_series_rejects_non_monotonic_timestamps() {
        let mut points = daily_points(&[100.0, 101.0, 102.0]);
        points[2].timestamp_ns = points[1].timestamp_ns;
        let err = PriceSeries::new(points).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::NonMonotonicTimestamp { index: 2, .. }
        ));
    }

    #[test]
    fn test_from_columns_rejects_length_mismatch() {
        let err = PriceSeries::from_columns(&[0, 1], &[100.0]).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::LengthMismatch { left: 2, right: 1 }
        ));
    }

    #[test]
    fn test_return_series_is_one_shorter() {
        let prices = PriceSeries::new(daily_points(&[100.0, 101.0, 99.0, 102.0])).unwrap();
        let returns = ReturnSeries::from_prices(&prices).unwrap();
        assert_eq!(returns.len(), prices.len() - 1);
    }

    #[test]
    fn test_return_series_values_and_timestamps() {
        let prices = PriceSeries::new(daily_points(&[100.0, 101.0])).unwrap();
        let returns = ReturnSeries::from_prices(&prices).unwrap();

        let expected = (101.0f64 / 100.0).ln();
        assert!((returns.points()[0].value - expected).abs() < 1e-15);
        // Stamped with the later price's timestamp
        assert_eq!(
            returns.points()[0].timestamp_ns,
            prices.points()[1].timestamp_ns
        );
    }

    #[test]
    fn test_return_series_requires_two_prices() {
        let prices = PriceSeries::new(daily_points(&[100.0])).unwrap();
        let err = ReturnSeries::from_prices(&prices).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::InsufficientData {
                required: 2,
                available: 1
            }
        ));
    }

    #[test]
    fn test_return_series_from_points_allows_nan_values() {
        let points = vec![
            ReturnPoint {
                timestamp_ns: 0,
                value: 0.01,
            },
            ReturnPoint {
                timestamp_ns: 1,
                value: f64::NAN,
            },
        ];
        let returns = ReturnSeries::from_points(points).unwrap();
        assert_eq!(returns.len(), 2);
        assert!(returns.points()[1].value.is_nan());
    }

    #[test]
    fn test_return_series_from_points_rejects_unsorted() {
        let points = vec![
            ReturnPoint {
                timestamp_ns: 5,
                value: 0.01,
            },
            ReturnPoint {
                timestamp_ns: 5,
                value: 0.02,
            },
        ];
        let err = ReturnSeries::from_points(points).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::NonMonotonicTimestamp { index: 1, .. }
        ));
    }

    #[test]
    fn test_price_point_serde_roundtrip() {
        let point = PricePoint {
            timestamp_ns: 1_704_067_200_000_000_000,
            price: 101.25,
        };
        let json = serde_json::to_string(&point).unwrap();
        let deserialized: PricePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, deserialized);
    }
}
