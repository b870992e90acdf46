//! Study configuration.

/// Configuration for a volatility event study.
///
/// All fields have serde defaults matching daily equity data, so an empty
/// JSON object is a valid configuration. Validation (window lengths, decay
/// factor range) happens in the study runner, not here.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StudyConfig {
    /// Rolling window lengths in observations
    #[serde(default = "default_windows")]
    pub windows: Vec<usize>,
    /// EWMA decay factor, in (0, 1) exclusive
    #[serde(default = "default_lambda")]
    pub ewma_lambda: f64,
    /// Observations per year for annualization; 1.0 disables annualization
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: f64,
    /// Observations before each event to analyze
    #[serde(default = "default_horizon")]
    pub lookback: usize,
    /// Observations at-or-after each event to analyze
    #[serde(default = "default_horizon")]
    pub lookahead: usize,
    /// Label of the volatility series driving the event analysis;
    /// `None` selects the EWMA series
    #[serde(default)]
    pub event_measure: Option<String>,
}

fn default_windows() -> Vec<usize> {
    vec![20, 60, 120]
}

fn default_lambda() -> f64 {
    0.94
}

fn default_periods_per_year() -> f64 {
    252.0
}

fn default_horizon() -> usize {
    30
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            windows: default_windows(),
            ewma_lambda: default_lambda(),
            periods_per_year: default_periods_per_year(),
            lookback: default_horizon(),
            lookahead: default_horizon(),
            event_measure: None,
        }
    }
}
