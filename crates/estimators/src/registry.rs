//! Estimator registry for dynamic estimator creation.

use crate::error::EstimatorError;
use crate::impl_::{ewma::EwmaVolatility, rolling::RollingVolatility};
use crate::traits::{EstimatorParams, EstimatorSpec, VolatilityEstimator};
use std::collections::HashMap;
use std::sync::Arc;

/// Factory function type for creating estimators from parameters.
pub type EstimatorFactory = Box<
    dyn Fn(&EstimatorParams) -> Result<Arc<dyn VolatilityEstimator>, EstimatorError>
        + Send
        + Sync,
>;

/// Registry for estimator factories.
///
/// Allows dynamic creation of estimators by name and parameters, so new
/// volatility measures plug in without the alignment or summarization
/// layers knowing about them.
pub struct EstimatorRegistry {
    /// Estimator factories by name.
    factories: HashMap<String, EstimatorFactory>,
}

impl EstimatorRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers an estimator factory.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(&EstimatorParams) -> Result<Arc<dyn VolatilityEstimator>, EstimatorError>
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Creates an estimator from a specification.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::UnknownEstimator`] if the name is not
    /// registered and [`EstimatorError::InvalidParams`] when parameters do
    /// not match the estimator.
    pub fn create(
        &self,
        spec: &EstimatorSpec,
    ) -> Result<Arc<dyn VolatilityEstimator>, EstimatorError> {
        let factory = self
            .factories
            .get(&spec.name)
            .ok_or_else(|| EstimatorError::UnknownEstimator(spec.name.clone()))?;
        factory(&spec.params)
    }

    /// Checks if an estimator is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns list of registered estimator names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Creates a registry with the built-in estimators pre-registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("rolling", |params| match params {
            EstimatorParams::Rolling {
                window,
                periods_x100,
            } => Ok(Arc::new(RollingVolatility::new(
                *window,
                EstimatorParams::decode_x100(*periods_x100),
            )?)),
            EstimatorParams::Ewma { .. } => Err(EstimatorError::invalid_params(
                "rolling requires Rolling params",
            )),
        });

        registry.register("ewma", |params| match params {
            EstimatorParams::Ewma {
                lambda_x100,
                periods_x100,
            } => Ok(Arc::new(EwmaVolatility::new(
                EstimatorParams::decode_x100(*lambda_x100),
                EstimatorParams::decode_x100(*periods_x100),
            )?)),
            EstimatorParams::Rolling { .. } => Err(EstimatorError::invalid_params(
                "ewma requires Ewma params",
            )),
        });

        registry
    }
}

impl Default for EstimatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
