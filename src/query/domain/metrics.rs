//! Metrics payload and the result capability of query types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Aggregate metrics collected for one component during a collection cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentData {
    name: String,
    metrics: BTreeMap<String, f64>,
}

impl ComponentData {
    /// Creates an empty payload for the named component.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metrics: BTreeMap::new(),
        }
    }

    /// Returns the component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records a metric value, replacing any earlier value for the same name.
    pub fn add_metric(&mut self, name: impl Into<String>, value: f64) {
        self.metrics.insert(name.into(), value);
    }

    /// Returns the value recorded for a metric.
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    /// Returns all recorded metrics ordered by name.
    #[must_use]
    pub const fn metrics(&self) -> &BTreeMap<String, f64> {
        &self.metrics
    }

    /// Folds every result of a query invocation into the payload.
    pub fn absorb(&mut self, results: &[Box<dyn QueryResult>]) {
        for result in results {
            result.add_metrics(self);
        }
    }
}

/// Result capability every query type must provide.
///
/// Each row returned for a query is deserialized into the query type, and the
/// scheduler later asks every value to fold itself into the cycle's
/// [`ComponentData`].
pub trait QueryResult: fmt::Debug + Send + Sync {
    /// Adds this result's metrics to the payload.
    fn add_metrics(&self, component_data: &mut ComponentData);
}
