//! # Tickersim — Mock Market-Data Service
//!
//! ```text
//!  ┌─────────────┐  GET /prices              ┌──────────────────────────────┐
//!  │  Dashboard  │ ────────────────────────▶ │ AppState                     │
//!  │  / Clients  │  GET /health              │ ├─ SymbolRegistry (fixed)    │
//!  └─────────────┘  GET /                    │ ├─ Metrics (prometheus)      │
//!                                            │ ├─ Entropy  (latency/faults) │
//!  ┌─────────────┐  GET /metrics             │ └─ Forwarder ──────────────┐ │
//!  │  Scraper    │ ────────────────────────▶ │                            │ │
//!  └─────────────┘                           └────────────────────────────┼─┘
//!                                                                         │
//!                       custom metric points (latency, quote_count)  ◀────┘
//! ```
//!
//! ## Environment Variables
//!
//! | Variable               | Default                           | Description                     |
//! |------------------------|-----------------------------------|---------------------------------|
//! | `PROJECT_ID`           | `demo-project`                    | Label on forwarded points       |
//! | `MONITORING_WRITE_URL` | unset (forwarding disabled)       | Custom-metrics ingest endpoint  |
//! | `MONITORING_API_KEY`   | unset                             | Credential for the ingest       |
//! | `RUST_LOG`             | `tickersim=debug,tower_http=info` | Tracing filter                  |
//!
//! The service always listens on `0.0.0.0:5000`.

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeFile,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod engine;
mod error;
mod metrics;
mod models;
mod monitor;
mod routes;
mod state;

use config::Config;
use routes::{
    ops::{health_check, metrics_exposition},
    prices::get_prices,
};
use state::build_state;

/// All interfaces, fixed port.
const BIND_ADDR: &str = "0.0.0.0:5000";

// ─── Entry Point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env (optional — CI/prod can use real env vars) ──────────────
    dotenvy::dotenv().ok();

    // ── 2. Structured logging ─────────────────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("tickersim=debug".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    // ── 3. Config + shared state ──────────────────────────────────────────────
    let config = Config::from_env();
    info!(project_id = %config.project_id, "configuration loaded");

    let state = build_state(&config)?;

    // ── 4. CORS ───────────────────────────────────────────────────────────────
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // ── 5. Router ─────────────────────────────────────────────────────────────
    let app = Router::new()
        .route_service("/", ServeFile::new("static/index.html"))
        .route("/prices", get(get_prices))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_exposition))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // ── 6. Serve ──────────────────────────────────────────────────────────────
    let addr: SocketAddr = BIND_ADDR.parse()?;
    info!(?addr, "🚀 tickersim serving simulated market data");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
