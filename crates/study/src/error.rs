//! Study error types.

use thiserror::Error;

/// Errors that can occur during study orchestration.
#[derive(Debug, Error)]
pub enum StudyError {
    /// JSON config parse error
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// Config validation error
    #[error("config validation error: {0}")]
    ConfigValidation(String),

    /// Series construction or derivation error
    #[error("series error: {0}")]
    Series(#[from] vega_types::SeriesError),

    /// Estimator construction error
    #[error("estimator error: {0}")]
    Estimator(#[from] vega_estimators::EstimatorError),

    /// Event alignment error
    #[error("event error: {0}")]
    Event(#[from] vega_events::EventError),

    /// The configured event measure matches no computed series
    #[error("unknown event measure: {0}")]
    UnknownEventMeasure(String),
}

impl StudyError {
    /// Returns true if this is a config parse/validation error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            StudyError::ConfigParse(_)
                | StudyError::ConfigValidation(_)
                | StudyError::UnknownEventMeasure(_)
        )
    }

    /// Returns the error category for the output contract.
    /// Categories: `config`, `series`, `estimator`, `event`
    #[must_use]
    pub fn error_category(&self) -> &'static str {
        match self {
            StudyError::ConfigParse(_)
            | StudyError::ConfigValidation(_)
            | StudyError::UnknownEventMeasure(_) => "config",
            StudyError::Series(_) => "series",
            StudyError::Estimator(_) => "estimator",
            StudyError::Event(_) => "event",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_config() {
        let err = StudyError::ConfigValidation("windows is empty".to_string());
        assert_eq!(err.error_category(), "config");
        assert!(err.is_config_error());

        let err = StudyError::UnknownEventMeasure("rolling-7".to_string());
        assert_eq!(err.error_category(), "config");
        assert!(err.is_config_error());
    }

    #[test]
    fn test_error_category_series() {
        let err = StudyError::Series(vega_types::SeriesError::Empty);
        assert_eq!(err.error_category(), "series");
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_error_category_estimator() {
        let err = StudyError::Estimator(
            vega_estimators::EstimatorError::UnknownEstimator("garch".to_string()),
        );
        assert_eq!(err.error_category(), "estimator");
    }
}
