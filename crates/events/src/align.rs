//! Event-to-series window alignment.

use vega_types::{MacroEvent, VolPoint, VolatilitySeries};

use crate::calendar::EventCalendar;
use crate::error::EventError;

/// Before/after volatility slices around one aligned event.
///
/// Slices hold only defined observations; undefined (NaN) values are
/// excluded. Slices are truncated at the series boundaries, never padded.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EventWindow {
    /// The aligned event.
    pub event: MacroEvent,
    /// Label of the source volatility series.
    pub series_label: String,
    /// Series index the event resolved to (last index at-or-before the
    /// event timestamp).
    pub effective_idx: usize,
    /// Defined observations from the `lookback_n` slots strictly before
    /// the effective index.
    pub before: Vec<VolPoint>,
    /// Defined observations from the `lookahead_n` slots at-or-after the
    /// effective index.
    pub after: Vec<VolPoint>,
    /// True when a requested non-empty slice came back empty after
    /// excluding undefined values.
    pub incomplete: bool,
}

impl EventWindow {
    /// Iterates over the defined before-observation values.
    pub fn before_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.before.iter().map(|p| p.value)
    }

    /// Iterates over the defined after-observation values.
    pub fn after_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.after.iter().map(|p| p.value)
    }
}

/// Statistics for one calendar alignment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct AlignmentStats {
    /// Events submitted for alignment.
    pub total_events: usize,
    /// Events that produced a window.
    pub aligned: usize,
    /// Aligned windows flagged incomplete.
    pub incomplete: usize,
    /// Events rejected as outside series coverage.
    pub out_of_range: usize,
}

/// Result of aligning a full calendar against one volatility series.
#[derive(Debug)]
pub struct AlignedEvents {
    /// Successfully aligned windows, calendar order.
    pub windows: Vec<EventWindow>,
    /// Events rejected during alignment, with the rejection error.
    pub rejected: Vec<(MacroEvent, EventError)>,
    /// Pass statistics.
    pub stats: AlignmentStats,
}

/// Aligns one event against a volatility series.
///
/// The effective index is the last series index whose timestamp is at or
/// before the event timestamp; an event that exactly matches a series
/// timestamp resolves to that index.
///
/// The before slice takes the `lookback_n` observations strictly before the
/// effective index, the after slice the `lookahead_n` observations starting
/// at it; both are then filtered to defined values. When a requested
/// non-empty slice ends up empty after filtering, the window is marked
/// [`EventWindow::incomplete`] instead of being discarded, so summarization
/// can still count it.
///
/// # Out-of-range policy
/// An event is rejected when its timestamp precedes the first series
/// timestamp, or trails the last one by more than one observation step.
/// The step is the median spacing of the series timestamps (robust to
/// gaps); a single-point series has zero trailing tolerance.
///
/// # Errors
/// - [`EventError::EmptySeries`] when the series has no points.
/// - [`EventError::OutOfRange`] per the policy above.
pub fn align_event(
    event: &MacroEvent,
    series: &VolatilitySeries,
    lookback_n: usize,
    lookahead_n: usize,
) -> Result<EventWindow, EventError> {
    let points = series.points();
    if points.is_empty() {
        return Err(EventError::EmptySeries);
    }

    let first_ns = points[0].timestamp_ns;
    let last_ns = points[points.len() - 1].timestamp_ns;
    let tolerance_ns = median_step_ns(points);

    if event.timestamp_ns < first_ns
        || event.timestamp_ns > last_ns.saturating_add(tolerance_ns)
    {
        return Err(EventError::OutOfRange {
            event_ns: event.timestamp_ns,
            first_ns,
            last_ns,
            tolerance_ns,
        });
    }

    // At least the first point satisfies ts <= event_ns here
    let effective_idx = points.partition_point(|p| p.timestamp_ns <= event.timestamp_ns) - 1;

    let before_start = effective_idx.saturating_sub(lookback_n);
    let before: Vec<VolPoint> = points[before_start..effective_idx]
        .iter()
        .copied()
        .filter(|p| p.value.is_finite())
        .collect();

    let after_end = effective_idx.saturating_add(lookahead_n).min(points.len());
    let after: Vec<VolPoint> = points[effective_idx..after_end]
        .iter()
        .copied()
        .filter(|p| p.value.is_finite())
        .collect();

    let incomplete =
        (lookback_n > 0 && before.is_empty()) || (lookahead_n > 0 && after.is_empty());

    Ok(EventWindow {
        event: event.clone(),
        series_label: series.label().to_string(),
        effective_idx,
        before,
        after,
        incomplete,
    })
}

/// Aligns every calendar event against one volatility series.
///
/// Per-event failures never abort the pass: rejected events are collected
/// alongside the windows, and [`AlignmentStats`] summarizes the outcome.
#[must_use]
pub fn align_calendar(
    calendar: &EventCalendar,
    series: &VolatilitySeries,
    lookback_n: usize,
    lookahead_n: usize,
) -> AlignedEvents {
    let mut windows = Vec::new();
    let mut rejected = Vec::new();
    let mut stats = AlignmentStats {
        total_events: calendar.len(),
        ..AlignmentStats::default()
    };

    for event in calendar.events() {
        match align_event(event, series, lookback_n, lookahead_n) {
            Ok(window) => {
                stats.aligned += 1;
                if window.incomplete {
                    stats.incomplete += 1;
                }
                windows.push(window);
            }
            Err(err) => {
                stats.out_of_range += 1;
                rejected.push((event.clone(), err));
            }
        }
    }

    AlignedEvents {
        windows,
        rejected,
        stats,
    }
}

/// Median timestamp spacing of the series, 0 for fewer than two points.
fn median_step_ns(points: &[VolPoint]) -> i64 {
    if points.len() < 2 {
        return 0;
    }
    let mut steps: Vec<i64> = points
        .windows(2)
        .map(|w| w[1].timestamp_ns - w[0].timestamp_ns)
        .collect();
    steps.sort_unstable();
    steps[steps.len() / 2]
}
