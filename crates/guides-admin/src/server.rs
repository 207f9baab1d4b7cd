//! Listener lifecycle: bind, then serve until the process dies.
//!
//! There is no graceful shutdown; bind and serve errors are returned to
//! `main`, which treats them as fatal.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use guides_core::error::{GuidesError, Result};

use crate::{app_state::AppState, router};

pub async fn bind(listen: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(listen).await.map_err(|source| GuidesError::Bind {
        addr: listen.to_string(),
        source,
    })
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = router::build_router(state);
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "admin server listening");
    }
    axum::serve(listener, app)
        .await
        .map_err(|e| GuidesError::Internal(format!("server failed: {e}")))
}
