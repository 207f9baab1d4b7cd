//! guides admin server.
//!
//! - `GET /health`  : liveness
//! - `GET /metrics` : host, memory, network stats plus the metric registry as JSON
//!
//! `PORT` is required; startup fails fast without it.

use tracing_subscriber::{fmt, EnvFilter};

use guides_admin::{app_state, config, server};
use guides_core::error::Result;

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, fatal = e.is_fatal(), "guides-admin stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    let listen = cfg.listen_addr();

    let state = app_state::AppState::new(cfg)?;

    tracing::info!(%listen, "guides-admin starting");
    let listener = server::bind(listen).await?;
    server::serve(listener, state).await
}
