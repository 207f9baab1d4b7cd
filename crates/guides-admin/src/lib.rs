//! guides admin server library entry.
//!
//! Wires env config, the host stats provider, the metric registry, and the
//! two operational routes into an axum application. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod server;
pub mod stats;
