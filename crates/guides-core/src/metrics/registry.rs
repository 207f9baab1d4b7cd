//! Named metric registry.
//!
//! The registry is an explicitly owned value: callers create one, register
//! metrics on it, and hand it to whatever exports it. `to_json` renders all
//! metrics as one object with names in sorted order so output is stable
//! across requests.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{GuidesError, Result};

use super::Metric;

#[derive(Default)]
pub struct Registry {
    metrics: DashMap<String, Arc<dyn Metric>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            metrics: DashMap::new(),
        }
    }

    /// Register `metric` under `name`. An existing entry is kept and the call fails.
    pub fn register(&self, name: impl Into<String>, metric: Arc<dyn Metric>) -> Result<()> {
        match self.metrics.entry(name.into()) {
            Entry::Occupied(e) => Err(GuidesError::DuplicateMetric(e.key().clone())),
            Entry::Vacant(e) => {
                tracing::debug!(name = %e.key(), kind = metric.kind(), "metric registered");
                e.insert(metric);
                Ok(())
            }
        }
    }

    /// Return the metric under `name`, registering the one built by `make` if absent.
    pub fn get_or_register<F>(&self, name: impl Into<String>, make: F) -> Arc<dyn Metric>
    where
        F: FnOnce() -> Arc<dyn Metric>,
    {
        self.metrics.entry(name.into()).or_insert_with(make).value().clone()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Metric>> {
        self.metrics.get(name).map(|e| e.value().clone())
    }

    /// Returns whether a metric was removed.
    pub fn unregister(&self, name: &str) -> bool {
        self.metrics.remove(name).is_some()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.metrics.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Render every metric into one JSON object keyed by name.
    pub fn to_json(&self) -> Result<String> {
        // Snapshot the handles first so no shard lock is held while metrics render.
        let handles: Vec<(String, Arc<dyn Metric>)> = self
            .metrics
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();

        let mut out = BTreeMap::new();
        for (name, metric) in handles {
            out.insert(name, metric.to_value()?);
        }
        Ok(serde_json::to_string(&out)?)
    }
}
