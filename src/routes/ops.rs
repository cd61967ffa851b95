//! # routes::ops
//!
//! Operational endpoints: liveness and metrics exposition.
//!
//! | Method | Path       | Description                                |
//! |--------|------------|--------------------------------------------|
//! | GET    | `/health`  | Fixed liveness body, no side effects       |
//! | GET    | `/metrics` | Prometheus text exposition of the registry |

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;

// ─── GET /health ──────────────────────────────────────────────────────────────

/// Liveness probe. Deterministic, touches no counters.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

// ─── GET /metrics ─────────────────────────────────────────────────────────────

/// Current metrics snapshot in the Prometheus text format.
pub async fn metrics_exposition(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let body = state.metrics.render()?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
