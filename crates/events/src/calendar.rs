//! Event calendar container.

use std::collections::BTreeSet;

use vega_types::MacroEvent;

/// Ordered collection of macro events.
///
/// Events are sorted by timestamp on construction (stable, so events that
/// share a timestamp keep their input order). Duplicate timestamps are
/// legal: two releases can land in the same minute.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct EventCalendar {
    events: Vec<MacroEvent>,
}

impl EventCalendar {
    /// Creates a calendar, sorting the events by timestamp.
    #[must_use]
    pub fn new(mut events: Vec<MacroEvent>) -> Self {
        events.sort_by_key(|e| e.timestamp_ns);
        Self { events }
    }

    /// Returns the number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true when the calendar has no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the events in timestamp order.
    #[must_use]
    pub fn events(&self) -> &[MacroEvent] {
        &self.events
    }

    /// Sorted, deduplicated set of event type labels.
    ///
    /// This is the grouping universe for summarization: a type whose events
    /// all fail alignment still gets a zero-count summary entry, so callers
    /// can tell "no data" from "no group".
    #[must_use]
    pub fn event_types(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|e| e.event_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
