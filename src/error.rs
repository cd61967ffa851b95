//! # error
//!
//! Centralised application error type.
//!
//! `/prices` returns `Result<_, AppError>`; the `IntoResponse` impl converts
//! failures into the fixed JSON error body callers expect, so scrapers and
//! dashboards always get a machine-readable response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The 5% fault-injection branch. Deliberate, not a real failure.
    #[error("simulated internal fault")]
    SimulatedFault,

    /// Catch-all for unexpected infrastructure failures.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Both variants surface the same opaque body; details stay in the logs.
        let body = Json(json!({
            "error": "Internal server error",
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
