//! Impact record and summary types.

use std::collections::BTreeMap;

use vega_types::MacroEvent;

/// Before/after impact for a single event (one aligned window).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EventImpactRecord {
    /// The analyzed event.
    pub event: MacroEvent,
    /// Label of the volatility series the window was cut from.
    pub series_label: String,
    /// Mean of the defined before-observations, if any.
    pub mean_before: Option<f64>,
    /// Mean of the defined after-observations, if any.
    pub mean_after: Option<f64>,
    /// `mean_after - mean_before`, when both are defined.
    pub change: Option<f64>,
    /// `change / mean_before`; `None` when `mean_before` is zero or
    /// undefined.
    pub change_pct: Option<f64>,
    /// True when a requested slice was empty after excluding undefined
    /// values.
    pub incomplete: bool,
}

/// Pooled aggregate statistics for one event type.
///
/// Undefined statistics are `None` (serialized as `null`), never zero: a
/// type with no surviving observations is distinguishable from a type whose
/// volatility did not move.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct TypeImpact {
    /// Event type label.
    pub event_type: String,
    /// Windows contributing at least one defined observation.
    pub sample_count: usize,
    /// Total windows seen for this type, contributing or not.
    pub window_count: usize,
    /// Pooled defined before-observations across all windows.
    pub obs_before: usize,
    /// Pooled defined after-observations across all windows.
    pub obs_after: usize,
    /// Pooled mean of the before-observations.
    pub mean_before: Option<f64>,
    /// Pooled mean of the after-observations.
    pub mean_after: Option<f64>,
    /// `mean_after - mean_before`.
    pub delta: Option<f64>,
    /// `delta / mean_before`; `None` when `mean_before` is zero or
    /// undefined.
    pub delta_pct: Option<f64>,
    /// Share of windows whose own after-mean exceeded their before-mean.
    pub increase_frequency: Option<f64>,
}

/// Impact summary keyed by event type.
///
/// Uses `BTreeMap` for deterministic (sorted) key order in serialized
/// output. A configured type with no data is present with
/// `sample_count == 0`, not absent.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ImpactSummary {
    /// Per-type aggregates.
    pub by_type: BTreeMap<String, TypeImpact>,
}

impl ImpactSummary {
    /// Gets the aggregate for one event type.
    #[must_use]
    pub fn get(&self, event_type: &str) -> Option<&TypeImpact> {
        self.by_type.get(event_type)
    }

    /// Returns the number of event types in the summary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    /// Returns true when the summary has no event types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}
