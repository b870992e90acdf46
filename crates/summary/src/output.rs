//! Output formatting helpers.

use crate::impact::{ImpactSummary, TypeImpact};

const RATIO_DECIMALS: u32 = 6;

/// Tabular summary payload for downstream rendering.
///
/// One rounded row per event type, sorted by label, so surrounding tools
/// can render the summary without touching the raw aggregates.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SummaryOutput {
    /// One row per event type, sorted by label.
    pub rows: Vec<TypeImpact>,
}

impl SummaryOutput {
    /// Builds a rounded, sorted tabular payload from a summary.
    #[must_use]
    pub fn from_summary(summary: &ImpactSummary) -> Self {
        let rows = summary
            .by_type
            .values()
            .cloned()
            .map(round_type_impact)
            .collect();
        Self { rows }
    }
}

/// Rounds a summary's statistics according to the output contract.
#[must_use]
pub fn round_summary(mut summary: ImpactSummary) -> ImpactSummary {
    for impact in summary.by_type.values_mut() {
        *impact = round_type_impact(impact.clone());
    }
    summary
}

fn round_type_impact(mut impact: TypeImpact) -> TypeImpact {
    impact.mean_before = impact.mean_before.map(round_ratio);
    impact.mean_after = impact.mean_after.map(round_ratio);
    impact.delta = impact.delta.map(round_ratio);
    impact.delta_pct = impact.delta_pct.map(round_ratio);
    impact.increase_frequency = impact.increase_frequency.map(round_ratio);
    impact
}

fn round_ratio(value: f64) -> f64 {
    round_to_decimals(value, RATIO_DECIMALS)
}

#[allow(clippy::cast_possible_wrap)]
fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impact(event_type: &str, mean_before: Option<f64>) -> TypeImpact {
        TypeImpact {
            event_type: event_type.to_string(),
            sample_count: 1,
            window_count: 1,
            obs_before: 1,
            obs_after: 1,
            mean_before,
            mean_after: Some(0.123_456_789),
            delta: None,
            delta_pct: None,
            increase_frequency: Some(1.0),
        }
    }

    #[test]
    fn test_rounding_to_six_decimals() {
        let mut summary = ImpactSummary::default();
        summary
            .by_type
            .insert("CPI".to_string(), impact("CPI", Some(0.123_456_789)));

        let rounded = round_summary(summary);
        let cpi = rounded.get("CPI").unwrap();
        assert_eq!(cpi.mean_before, Some(0.123_457));
        assert_eq!(cpi.mean_after, Some(0.123_457));
        // Undefined stays undefined, it never becomes a rounded zero
        assert_eq!(cpi.delta, None);
    }

    #[test]
    fn test_rows_are_sorted_by_type() {
        let mut summary = ImpactSummary::default();
        summary
            .by_type
            .insert("monetary_policy".to_string(), impact("monetary_policy", None));
        summary
            .by_type
            .insert("inflation".to_string(), impact("inflation", None));

        let output = SummaryOutput::from_summary(&summary);
        let labels: Vec<&str> = output.rows.iter().map(|r| r.event_type.as_str()).collect();
        assert_eq!(labels, vec!["inflation", "monetary_policy"]);
    }

    #[test]
    fn test_undefined_stats_serialize_as_null() {
        let mut summary = ImpactSummary::default();
        summary.by_type.insert("CPI".to_string(), impact("CPI", None));

        let output = SummaryOutput::from_summary(&summary);
        let json = serde_json::to_value(&output).unwrap();
        let row = &json["rows"][0];
        assert!(row["mean_before"].is_null());
        assert!(row["delta_pct"].is_null());
        assert_eq!(row["sample_count"], 1);
    }
}
