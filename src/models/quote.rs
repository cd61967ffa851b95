//! # models::quote
//!
//! Defines [`Quote`], the synthetic market snapshot returned by `/prices`.
//!
//! Quotes are ephemeral: constructed per-request, serialized, and dropped.
//! Nothing is persisted and no quote is ever shared between requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single simulated quote for one symbol.
///
/// Invariant: `bid <= price <= ask`, with all three values rounded to two
/// decimal places. The spread is symmetric around `price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// The trading symbol, e.g. `"AAPL"`.
    pub symbol: String,

    /// Mid price, the base price perturbed by up to ±2%.
    pub price: f64,

    /// Bid side: `price - spread / 2`.
    pub bid: f64,

    /// Ask side: `price + spread / 2`.
    pub ask: f64,

    /// UTC timestamp at generation time (ISO-8601 / RFC 3339 on the wire).
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    /// Bid-ask gap for this quote.
    #[inline]
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }
}
