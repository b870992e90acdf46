//! Event-layer error types.

use thiserror::Error;

/// Errors that can occur while aligning events to a volatility series.
#[derive(Debug, Error)]
pub enum EventError {
    /// The volatility series has no observations to align against.
    #[error("empty volatility series")]
    EmptySeries,

    /// Event timestamp outside series coverage.
    #[error(
        "event at {event_ns} outside series coverage [{first_ns}, {last_ns}] \
         (trailing tolerance {tolerance_ns} ns)"
    )]
    OutOfRange {
        /// Event timestamp (epoch-ns).
        event_ns: i64,
        /// First series timestamp (epoch-ns).
        first_ns: i64,
        /// Last series timestamp (epoch-ns).
        last_ns: i64,
        /// Tolerated trailing distance beyond the last timestamp (ns).
        tolerance_ns: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display_carries_coverage() {
        let err = EventError::OutOfRange {
            event_ns: 500,
            first_ns: 100,
            last_ns: 400,
            tolerance_ns: 50,
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("[100, 400]"));
        assert!(msg.contains("50"));
    }
}
