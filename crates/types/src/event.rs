//! Macro event records.

/// A scheduled macroeconomic event (e.g. a CPI release or a central bank
/// rate decision).
///
/// Event timestamps need not align with any series timestamp; alignment is
/// resolved by the events crate with at-or-before semantics.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MacroEvent {
    /// Unix epoch nanoseconds UTC of the scheduled release
    pub timestamp_ns: i64,
    /// Type label used for grouping (e.g. "inflation", "monetary_policy")
    pub event_type: String,
    /// Optional human-readable name (e.g. "CPI Release")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl MacroEvent {
    /// Creates an event with a timestamp and type label.
    #[must_use]
    pub fn new(timestamp_ns: i64, event_type: impl Into<String>) -> Self {
        Self {
            timestamp_ns,
            event_type: event_type.into(),
            name: None,
        }
    }

    /// Attaches a human-readable name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_roundtrip() {
        let event = MacroEvent::new(1_704_067_200_000_000_000, "inflation")
            .with_name("CPI Release");

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: MacroEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_event_name_is_optional_in_json() {
        let event: MacroEvent =
            serde_json::from_str(r#"{"timestamp_ns": 5, "event_type": "monetary_policy"}"#)
                .unwrap();
        assert_eq!(event.event_type, "monetary_policy");
        assert_eq!(event.name, None);
    }
}
