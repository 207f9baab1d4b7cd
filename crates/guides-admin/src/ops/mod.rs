//! Operational HTTP endpoints.
//!
//! - `/health`  : liveness, empty 200
//! - `/metrics` : JSON snapshot of host stats and the metric registry
//!
//! Both routes mark the `hits` meter exactly once per request.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use guides_core::error::Result;

use crate::app_state::AppState;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    state.hits().mark(1);
    StatusCode::OK
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    state.hits().mark(1);

    // Stats collection talks to the OS synchronously.
    let render_state = state.clone();
    match tokio::task::spawn_blocking(move || render_metrics(&render_state)).await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "metrics render task failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Build the `/metrics` document: `system`, `memory`, `network`, `metrics`, in that order.
///
/// Fragments are best-effort. A fragment that cannot be collected or
/// serialized is written as `{}` and logged; the document is still returned.
pub fn render_metrics(state: &AppState) -> String {
    let stats = state.stats();
    let system = fragment("system", stats.host_infos().and_then(|v| to_json(&v)));
    let memory = fragment("memory", stats.mem_stats().and_then(|v| to_json(&v)));
    let network = fragment("network", stats.net_io_stats().and_then(|v| to_json(&v)));
    let metrics = fragment("metrics", state.registry().to_json());

    let mut out = String::with_capacity(
        system.len() + memory.len() + network.len() + metrics.len() + 48,
    );
    out.push_str("{\"system\":");
    out.push_str(&system);
    out.push_str(",\"memory\":");
    out.push_str(&memory);
    out.push_str(",\"network\":");
    out.push_str(&network);
    out.push_str(",\"metrics\":");
    out.push_str(&metrics);
    out.push('}');
    out
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn fragment(key: &'static str, rendered: Result<String>) -> String {
    match rendered {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(fragment = key, error = %e, "metrics fragment failed, writing empty object");
            "{}".to_string()
        }
    }
}
