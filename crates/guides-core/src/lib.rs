//! guides core: transport-agnostic metric primitives and the shared error type.
//!
//! This crate holds the meter, counter, and registry used by the admin server,
//! plus the error surface shared across the workspace. It intentionally carries
//! no HTTP or runtime dependencies so the registry can be reused elsewhere.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `GuidesError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{GuidesError, Result};
pub use metrics::{Counter, Meter, MeterSnapshot, Metric, Registry};
