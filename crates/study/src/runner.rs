//! High-level study runner.

use vega_estimators::{EstimatorCache, EstimatorParams, EstimatorRegistry, EstimatorSpec};
use vega_events::{align_calendar, EventCalendar};
use vega_summary::{event_impacts, summarize, SummaryOutput};
use vega_types::{PriceSeries, ReturnSeries, StudyConfig};

use crate::error::StudyError;
use crate::result::StudyResult;

/// Validates a study configuration.
///
/// # Errors
/// [`StudyError::ConfigValidation`] naming the first violated rule.
pub fn validate_config(config: &StudyConfig) -> Result<(), StudyError> {
    if config.windows.is_empty() {
        return Err(StudyError::ConfigValidation(
            "windows is empty".to_string(),
        ));
    }
    if config.windows.iter().any(|&w| w == 0) {
        return Err(StudyError::ConfigValidation(
            "window length must be > 0".to_string(),
        ));
    }
    if !(config.ewma_lambda > 0.0 && config.ewma_lambda < 1.0) {
        return Err(StudyError::ConfigValidation(
            "ewma_lambda must be in (0, 1) exclusive".to_string(),
        ));
    }
    if !config.periods_per_year.is_finite() || config.periods_per_year <= 0.0 {
        return Err(StudyError::ConfigValidation(
            "periods_per_year must be > 0".to_string(),
        ));
    }
    if config.lookback == 0 && config.lookahead == 0 {
        return Err(StudyError::ConfigValidation(
            "lookback and lookahead cannot both be 0".to_string(),
        ));
    }
    Ok(())
}

/// Runs a full volatility event study.
///
/// Derives log returns from the prices, computes every configured rolling
/// window plus the EWMA measure, aligns the calendar against the configured
/// event-measure series (the EWMA series unless overridden), and produces
/// per-event impact records and the pooled per-type summary.
///
/// # Errors
/// - [`StudyError::ConfigValidation`] for invalid configuration values.
/// - [`StudyError::Series`] when the price series cannot yield returns.
/// - [`StudyError::Estimator`] when an estimator cannot be constructed.
/// - [`StudyError::UnknownEventMeasure`] when `event_measure` matches no
///   configured estimator label.
pub fn run_study(
    prices: &PriceSeries,
    calendar: &EventCalendar,
    config: &StudyConfig,
) -> Result<StudyResult, StudyError> {
    validate_config(config)?;

    let returns = ReturnSeries::from_prices(prices)?;
    tracing::debug!(
        "derived {} log returns from {} prices",
        returns.len(),
        prices.len()
    );

    let periods_x100 = EstimatorParams::encode_x100(config.periods_per_year);
    let mut specs: Vec<EstimatorSpec> = config
        .windows
        .iter()
        .map(|&window| {
            EstimatorSpec::new(
                "rolling",
                EstimatorParams::Rolling {
                    window,
                    periods_x100,
                },
            )
        })
        .collect();
    let ewma_spec = EstimatorSpec::new(
        "ewma",
        EstimatorParams::Ewma {
            lambda_x100: EstimatorParams::encode_x100(config.ewma_lambda),
            periods_x100,
        },
    );
    specs.push(ewma_spec.clone());

    let registry = EstimatorRegistry::with_defaults();
    let mut cache = EstimatorCache::with_capacity(specs.len());
    let mut volatility = Vec::with_capacity(specs.len());
    for spec in &specs {
        let estimator = registry.create(spec)?;
        let series = cache.get_or_compute(spec, &returns, estimator.as_ref());
        volatility.push(series.clone());
    }
    tracing::debug!("computed {} volatility series", volatility.len());

    let measure_label = config
        .event_measure
        .clone()
        .unwrap_or_else(|| ewma_spec.label());
    let series = volatility
        .iter()
        .find(|s| s.label() == measure_label)
        .ok_or_else(|| StudyError::UnknownEventMeasure(measure_label.clone()))?;

    let aligned = align_calendar(calendar, series, config.lookback, config.lookahead);
    tracing::info!(
        "aligned {}/{} events against {} ({} incomplete, {} out of range)",
        aligned.stats.aligned,
        aligned.stats.total_events,
        measure_label,
        aligned.stats.incomplete,
        aligned.stats.out_of_range
    );

    let impacts = event_impacts(&aligned.windows);
    let summary = summarize(&aligned.windows, &calendar.event_types());

    Ok(StudyResult {
        volatility,
        event_measure: measure_label,
        alignment: aligned.stats,
        event_impacts: impacts,
        summary: SummaryOutput::from_summary(&summary),
    })
}

/// Runs a study from a JSON configuration string.
///
/// # Errors
/// [`StudyError::ConfigParse`] when the JSON is invalid, plus everything
/// [`run_study`] returns.
pub fn run_study_from_json(
    prices: &PriceSeries,
    calendar: &EventCalendar,
    config_json: &str,
) -> Result<StudyResult, StudyError> {
    let config: StudyConfig =
        serde_json::from_str(config_json).map_err(|e| StudyError::ConfigParse(e.to_string()))?;
    run_study(prices, calendar, &config)
}
