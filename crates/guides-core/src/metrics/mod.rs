//! In-process metrics: meters, counters, and the registry that exports them.
//!
//! Every metric renders itself to a JSON value; the registry stitches those
//! values into a single object keyed by metric name.

pub mod counter;
pub mod meter;
pub mod registry;

pub use counter::Counter;
pub use meter::{Meter, MeterSnapshot};
pub use registry::Registry;

/// A named value the registry can export.
pub trait Metric: Send + Sync {
    /// Short type tag (`"meter"`, `"counter"`), used in logs.
    fn kind(&self) -> &'static str;

    /// Point-in-time JSON rendering of the metric.
    fn to_value(&self) -> serde_json::Result<serde_json::Value>;
}
