//! # routes::prices
//!
//! The quote batch endpoint.
//!
//! | Method | Path      | Description                                    |
//! |--------|-----------|------------------------------------------------|
//! | GET    | `/prices` | One synthetic quote per registered symbol      |
//!
//! Every request pays a simulated latency of 100–500 ms and has a 5% chance
//! of a synthetic 500. Both are policy, not real work: the sleep is async so
//! concurrent requests are unaffected.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use tracing::{field, info_span, warn, Instrument, Span};

use crate::engine::generate_quote;
use crate::error::AppError;
use crate::models::Quote;
use crate::state::SharedState;

// ─── GET /prices ──────────────────────────────────────────────────────────────

/// Produce a batch of quotes, or a synthetic failure.
///
/// 1. Count the request.
/// 2. Sleep for the drawn latency.
/// 3. 5% of the time: count an error, mark the span errored, return 500.
///    No quotes are generated on this path.
/// 4. Otherwise quote every symbol in registry order.
/// 5. Observe handling latency (timer excludes the counter bump) and forward
///    `latency` / `quote_count` as custom metric points, fire-and-forget.
pub async fn get_prices(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Quote>>, AppError> {
    let span = info_span!("get_prices", otel.status_code = field::Empty);

    async move {
        state.metrics.requests.inc();
        let started = Instant::now();

        tokio::time::sleep(state.entropy.latency()).await;

        if state.entropy.inject_fault() {
            state.metrics.errors.inc();
            Span::current().record("otel.status_code", "ERROR");
            warn!("injecting simulated internal fault");
            return Err(AppError::SimulatedFault);
        }

        let quotes: Vec<Quote> = state
            .registry
            .iter()
            .map(|entry| {
                generate_quote(
                    entry.code,
                    entry.base_price,
                    state.entropy.as_ref(),
                    state.clock.as_ref(),
                )
            })
            .collect();

        let elapsed = started.elapsed().as_secs_f64();
        state.metrics.latency.observe(elapsed);

        // Forwarding stays off the response path; failures are logged inside
        // the forwarder and never reach the caller.
        let forwarder = Arc::clone(&state.forwarder);
        let quote_count = quotes.len() as f64;
        tokio::spawn(async move {
            forwarder.write_point("latency", elapsed, &[("endpoint", "/prices")]).await;
            forwarder.write_point("quote_count", quote_count, &[("endpoint", "/prices")]).await;
        });

        Ok(Json(quotes))
    }
    .instrument(span)
    .await
}

// ─── Tests ────────────────────────────────────────────────────────────────────
