//! Shared error type across guides crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, GuidesError>;

/// Unified error type used by core and the admin server.
#[derive(Debug, Error)]
pub enum GuidesError {
    #[error("${0} must be set")]
    MissingEnv(&'static str),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("metric already registered: {0}")]
    DuplicateMetric(String),
    #[error("stats unavailable: {0}")]
    Stats(String),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl GuidesError {
    /// Whether the error must stop the process before it serves traffic.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GuidesError::MissingEnv(_) | GuidesError::InvalidConfig(_) | GuidesError::Bind { .. }
        )
    }
}
