//! Estimator cache for avoiding redundant computations.

use crate::traits::{EstimatorSpec, VolatilityEstimator};
use std::collections::{hash_map::Entry, HashMap};
use vega_types::{ReturnSeries, VolatilitySeries};

/// Cache for computed volatility series.
///
/// Stores computed series to avoid redundant calculations when the same
/// estimator configuration feeds several consumers (comparison tables,
/// event alignment). Uses [`EstimatorSpec`] as cache keys.
#[derive(Debug, Default)]
pub struct EstimatorCache {
    cache: HashMap<EstimatorSpec, VolatilitySeries>,
}

impl EstimatorCache {
    /// Creates a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Creates a cache with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(capacity),
        }
    }

    /// Checks if an estimator configuration is already cached.
    #[must_use]
    pub fn contains(&self, spec: &EstimatorSpec) -> bool {
        self.cache.contains_key(spec)
    }

    /// Gets the cached series for a configuration, if present.
    #[must_use]
    pub fn get(&self, spec: &EstimatorSpec) -> Option<&VolatilitySeries> {
        self.cache.get(spec)
    }

    /// Inserts a computed series into the cache.
    pub fn insert(&mut self, spec: EstimatorSpec, series: VolatilitySeries) {
        self.cache.insert(spec, series);
    }

    /// Gets or computes the series for an estimator.
    ///
    /// If the configuration is already cached, returns the cached series.
    /// Otherwise computes it, caches it, and returns it.
    pub fn get_or_compute(
        &mut self,
        spec: &EstimatorSpec,
        returns: &ReturnSeries,
        estimator: &dyn VolatilityEstimator,
    ) -> &VolatilitySeries {
        match self.cache.entry(spec.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(estimator.compute(returns)),
        }
    }
}
