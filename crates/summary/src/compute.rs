//! Summary computation entrypoints.

use std::collections::BTreeMap;

use vega_events::EventWindow;

use crate::impact::{EventImpactRecord, ImpactSummary, TypeImpact};

/// Computes per-event impact records, one per aligned window.
#[must_use]
pub fn event_impacts(windows: &[EventWindow]) -> Vec<EventImpactRecord> {
    windows
        .iter()
        .map(|window| {
            let mean_before = mean(window.before_values());
            let mean_after = mean(window.after_values());
            let change = sub(mean_after, mean_before);
            let change_pct = ratio(change, mean_before);

            EventImpactRecord {
                event: window.event.clone(),
                series_label: window.series_label.clone(),
                mean_before,
                mean_after,
                change,
                change_pct,
                incomplete: window.incomplete,
            }
        })
        .collect()
}

/// Pools aligned event windows into per-type aggregate statistics.
///
/// Pooling semantics: `mean_before` averages every defined before
/// observation across all windows of a type, so an event with more
/// surviving observations weighs more than it would under a
/// per-event-then-averaged scheme. The per-event means in
/// [`EventImpactRecord`] are the building blocks for the alternative
/// weighting if a caller needs it.
///
/// Every label in `event_types` yields an entry even when no window of
/// that type contributed data (`sample_count == 0`, statistics `None`).
/// Types that appear in `windows` but not in `event_types` are included
/// as well.
#[must_use]
pub fn summarize(windows: &[EventWindow], event_types: &[String]) -> ImpactSummary {
    let mut groups: BTreeMap<String, Group> = event_types
        .iter()
        .map(|label| (label.clone(), Group::default()))
        .collect();

    for window in windows {
        let group = groups.entry(window.event.event_type.clone()).or_default();
        group.window_count += 1;

        let before_n = window.before.len();
        let after_n = window.after.len();
        if before_n > 0 || after_n > 0 {
            group.contributing += 1;
        }

        group.obs_before += before_n;
        group.obs_after += after_n;
        group.sum_before += window.before_values().sum::<f64>();
        group.sum_after += window.after_values().sum::<f64>();

        // Per-window direction for the increase frequency
        if let (Some(before), Some(after)) =
            (mean(window.before_values()), mean(window.after_values()))
        {
            if after > before {
                group.increases += 1;
            }
        }
    }

    let by_type = groups
        .into_iter()
        .map(|(event_type, group)| {
            let impact = group.finalize(event_type.clone());
            (event_type, impact)
        })
        .collect();

    ImpactSummary { by_type }
}

#[derive(Default)]
struct Group {
    window_count: usize,
    contributing: usize,
    obs_before: usize,
    obs_after: usize,
    sum_before: f64,
    sum_after: f64,
    increases: usize,
}

impl Group {
    #[allow(clippy::cast_precision_loss)] // Observation counts stay far below f64 mantissa precision
    fn finalize(self, event_type: String) -> TypeImpact {
        let mean_before = if self.obs_before > 0 {
            Some(self.sum_before / self.obs_before as f64)
        } else {
            None
        };
        let mean_after = if self.obs_after > 0 {
            Some(self.sum_after / self.obs_after as f64)
        } else {
            None
        };
        let delta = sub(mean_after, mean_before);
        let delta_pct = ratio(delta, mean_before);
        let increase_frequency = if self.window_count > 0 {
            Some(self.increases as f64 / self.window_count as f64)
        } else {
            None
        };

        TypeImpact {
            event_type,
            sample_count: self.contributing,
            window_count: self.window_count,
            obs_before: self.obs_before,
            obs_after: self.obs_after,
            mean_before,
            mean_after,
            delta,
            delta_pct,
            increase_frequency,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count > 0 {
        Some(sum / count as f64)
    } else {
        None
    }
}

fn sub(after: Option<f64>, before: Option<f64>) -> Option<f64> {
    match (after, before) {
        (Some(a), Some(b)) => Some(a - b),
        _ => None,
    }
}

fn ratio(delta: Option<f64>, base: Option<f64>) -> Option<f64> {
    match (delta, base) {
        (Some(d), Some(b)) if b != 0.0 => Some(d / b),
        _ => None,
    }
}
