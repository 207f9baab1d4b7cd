//! Shared application state for the admin server.
//!
//! The registry, the hit meter, and the stats provider are owned here and
//! injected into handlers through axum's `State`; nothing is process-global.

use std::sync::Arc;

use guides_core::error::Result;
use guides_core::{Meter, Registry};

use crate::config::AdminConfig;
use crate::stats::{HostStats, StatsProvider};

/// Registry name of the per-request meter.
pub const HITS_METRIC: &str = "hits";

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AdminConfig,
    registry: Registry,
    hits: Arc<Meter>,
    stats: Arc<dyn StatsProvider>,
}

impl AppState {
    /// Build state backed by the host's real statistics.
    pub fn new(cfg: AdminConfig) -> Result<Self> {
        Self::with_stats(cfg, Arc::new(HostStats::new()))
    }

    /// Build state with an explicit stats provider.
    pub fn with_stats(cfg: AdminConfig, stats: Arc<dyn StatsProvider>) -> Result<Self> {
        let registry = Registry::new();
        let hits = Arc::new(Meter::new());
        registry.register(HITS_METRIC, hits.clone())?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                hits,
                stats,
            }),
        })
    }

    pub fn cfg(&self) -> &AdminConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn hits(&self) -> &Meter {
        &self.inner.hits
    }

    pub fn stats(&self) -> &dyn StatsProvider {
        self.inner.stats.as_ref()
    }
}
