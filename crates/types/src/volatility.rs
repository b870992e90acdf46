//! Volatility series with explicit undefined markers.

/// A single volatility estimate.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VolPoint {
    /// Unix epoch nanoseconds UTC
    pub timestamp_ns: i64,
    /// Estimated volatility, >= 0; NaN marks "no value"
    pub value: f64,
}

/// Ordered volatility estimates from one estimator configuration.
///
/// `f64::NAN` is the explicit undefined marker for timestamps without
/// sufficient history (or with corrupt input windows) and is never conflated
/// with zero volatility. The `low_confidence` prefix length marks leading
/// defined points that are degenerate estimates, e.g. the single-observation
/// EWMA seed.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct VolatilitySeries {
    label: String,
    points: Vec<VolPoint>,
    low_confidence: usize,
}

impl VolatilitySeries {
    /// Creates a new series under an estimator label such as `rolling-20`
    /// or `ewma-0.94`.
    #[must_use]
    pub fn new(label: impl Into<String>, points: Vec<VolPoint>) -> Self {
        Self {
            label: label.into(),
            points,
            low_confidence: 0,
        }
    }

    /// Marks the first `prefix` points as low-confidence estimates.
    #[must_use]
    pub fn with_low_confidence(mut self, prefix: usize) -> Self {
        self.low_confidence = prefix;
        self
    }

    /// Returns the estimator label identifying this series.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of points (defined or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns all points, including undefined ones.
    #[must_use]
    pub fn points(&self) -> &[VolPoint] {
        &self.points
    }

    /// Returns the value at index if defined.
    #[must_use]
    pub fn value_at(&self, idx: usize) -> Option<f64> {
        self.points
            .get(idx)
            .map(|p| p.value)
            .filter(|v| v.is_finite())
    }

    /// Returns the timestamp at index.
    #[must_use]
    pub fn timestamp_at(&self, idx: usize) -> Option<i64> {
        self.points.get(idx).map(|p| p.timestamp_ns)
    }

    /// Returns true when the value at index is defined.
    #[must_use]
    pub fn is_defined(&self, idx: usize) -> bool {
        self.value_at(idx).is_some()
    }

    /// Returns true when the value at index is defined but flagged as a
    /// degenerate (low-confidence) estimate.
    #[must_use]
    pub fn is_low_confidence(&self, idx: usize) -> bool {
        idx < self.low_confidence && self.is_defined(idx)
    }

    /// Returns the number of defined values.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.points.iter().filter(|p| p.value.is_finite()).count()
    }

    /// Iterates over defined (timestamp, value) pairs.
    pub fn defined(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.points
            .iter()
            .filter(|p| p.value.is_finite())
            .map(|p| (p.timestamp_ns, p.value))
    }
}
