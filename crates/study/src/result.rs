//! Study result container.

use vega_events::AlignmentStats;
use vega_summary::{EventImpactRecord, SummaryOutput};
use vega_types::VolatilitySeries;

/// Complete output of one study run.
///
/// Serializable so surrounding tools can render tables or persist results;
/// the library itself owns no file format.
#[derive(Debug, serde::Serialize)]
pub struct StudyResult {
    /// Every computed volatility series (rolling windows plus EWMA).
    pub volatility: Vec<VolatilitySeries>,
    /// Label of the series that drove the event analysis.
    pub event_measure: String,
    /// Alignment pass statistics.
    pub alignment: AlignmentStats,
    /// Per-event impact rows, calendar order.
    pub event_impacts: Vec<EventImpactRecord>,
    /// Pooled per-type summary, rounded for rendering.
    pub summary: SummaryOutput,
}

impl StudyResult {
    /// Finds a computed volatility series by label.
    #[must_use]
    pub fn series(&self, label: &str) -> Option<&VolatilitySeries> {
        self.volatility.iter().find(|s| s.label() == label)
    }
}
