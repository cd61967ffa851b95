//! # metrics
//!
//! Process-wide Prometheus metrics, owned by `AppState` rather than hidden
//! behind a global registry so tests can spin up isolated instances.
//!
//! | Metric                                | Type      | Meaning                    |
//! |---------------------------------------|-----------|----------------------------|
//! | `market_data_requests_total`          | counter   | `/prices` requests seen    |
//! | `market_data_errors_total`            | counter   | synthetic faults injected  |
//! | `market_data_request_latency_seconds` | histogram | `/prices` handling latency |
//!
//! All updates are atomic inside the prometheus crate, so concurrent handlers
//! never lose increments.

use anyhow::Context;
use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, Opts, Registry, TextEncoder};

/// Metrics bundle registered against one private [`Registry`].
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub requests: IntCounter,
    pub errors: IntCounter,
    pub latency: Histogram,
}

impl Metrics {
    /// Build and register the three metric families.
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let requests = IntCounter::with_opts(Opts::new(
            "market_data_requests_total",
            "Total number of requests",
        ))?;
        let errors = IntCounter::with_opts(Opts::new(
            "market_data_errors_total",
            "Total number of errors",
        ))?;
        let latency = Histogram::with_opts(HistogramOpts::new(
            "market_data_request_latency_seconds",
            "Request latency in seconds",
        ))?;

        registry
            .register(Box::new(requests.clone()))
            .context("registering request counter")?;
        registry
            .register(Box::new(errors.clone()))
            .context("registering error counter")?;
        registry
            .register(Box::new(latency.clone()))
            .context("registering latency histogram")?;

        Ok(Self { registry, requests, errors, latency })
    }

    /// Render the current snapshot in the Prometheus text exposition format.
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .context("encoding metrics exposition")?;
        String::from_utf8(buffer).context("metrics exposition was not UTF-8")
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
