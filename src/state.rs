//! # state
//!
//! Shared application state injected into every axum handler.
//!
//! * `Arc<AppState>` is cloned cheaply into handlers via `axum::extract::State`.
//! * Nothing here needs a lock: the symbol registry is immutable, the
//!   prometheus primitives are internally atomic, and the entropy/clock
//!   sources are stateless.
//! * Entropy and clock are trait objects so tests can pin the fault branch
//!   and the sleep duration without touching global random state.

use std::sync::Arc;

use crate::config::Config;
use crate::engine::{Clock, Entropy, SystemClock, ThreadRngEntropy};
use crate::metrics::Metrics;
use crate::models::SymbolRegistry;
use crate::monitor::Forwarder;

/// Top-level shared state.
pub struct AppState {
    /// Fixed symbol → base-price universe.
    pub registry: SymbolRegistry,

    /// Process-wide request/error counters and latency histogram.
    pub metrics: Metrics,

    /// Best-effort custom-metrics forwarder (possibly disabled).
    pub forwarder: Arc<Forwarder>,

    /// Randomness source driving perturbation, latency, and fault injection.
    pub entropy: Arc<dyn Entropy>,

    /// Timestamp source for generated quotes.
    pub clock: Arc<dyn Clock>,
}

/// Convenience alias so handlers can write `SharedState`.
pub type SharedState = Arc<AppState>;

/// Construct production state from config, ready for the router.
pub fn build_state(config: &Config) -> anyhow::Result<SharedState> {
    Ok(Arc::new(AppState {
        registry: SymbolRegistry::default(),
        metrics: Metrics::new()?,
        forwarder: Arc::new(Forwarder::from_config(config)),
        entropy: Arc::new(ThreadRngEntropy),
        clock: Arc::new(SystemClock),
    }))
}

#[cfg(test)]
impl AppState {
    /// State with deterministic entropy/clock and forwarding disabled.
    pub fn for_tests(entropy: impl Entropy + 'static) -> SharedState {
        use crate::engine::entropy::FixedClock;
        use chrono::TimeZone;

        Arc::new(AppState {
            registry: SymbolRegistry::default(),
            metrics: Metrics::new().expect("metrics registration"),
            forwarder: Arc::new(Forwarder::disabled()),
            entropy: Arc::new(entropy),
            clock: Arc::new(FixedClock(
                chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            )),
        })
    }
}
