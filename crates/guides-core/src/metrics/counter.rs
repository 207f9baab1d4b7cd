use std::sync::atomic::{AtomicI64, Ordering};

use serde_json::json;

use super::Metric;

/// Plain signed counter.
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicI64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc(&self, n: i64) {
        self.value.fetch_add(n, Ordering::Relaxed);
    }

    pub fn dec(&self, n: i64) {
        self.value.fetch_sub(n, Ordering::Relaxed);
    }

    pub fn count(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Reset to zero.
    pub fn clear(&self) {
        self.value.store(0, Ordering::Relaxed);
    }
}

impl Metric for Counter {
    fn kind(&self) -> &'static str {
        "counter"
    }

    fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        Ok(json!({ "count": self.count() }))
    }
}
