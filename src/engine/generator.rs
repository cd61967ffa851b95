//! # engine::generator
//!
//! Synthesizes one [`Quote`] from a symbol's base reference price.
//!
//! The generator is a pure function of its inputs plus the injected entropy
//! and clock, so unit tests can pin every draw and assert exact output.

use crate::engine::entropy::{Clock, Entropy};
use crate::models::Quote;

/// Round a monetary value to two decimal places.
#[inline]
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate a synthetic quote for `symbol`.
///
/// The price is the base price shifted by a uniform draw in ±2%; bid and ask
/// sit symmetrically around it, separated by a spread of [0.01%, 0.05%] of
/// the price. All monetary fields are rounded to cents.
///
/// Never fails: the registry guarantees every symbol it iterates has a valid
/// base price.
pub fn generate_quote(
    symbol: &str,
    base_price: f64,
    entropy: &dyn Entropy,
    clock: &dyn Clock,
) -> Quote {
    let price = base_price * (1.0 + entropy.price_shift());
    let spread = price * entropy.spread_fraction();

    Quote {
        symbol: symbol.to_string(),
        price: round_cents(price),
        bid: round_cents(price - spread / 2.0),
        ask: round_cents(price + spread / 2.0),
        timestamp: clock.now(),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::entropy::{
        FixedClock, FixedEntropy, ThreadRngEntropy, MAX_PRICE_SHIFT, SPREAD_FRACTION_MAX,
    };
    use chrono::TimeZone;

    fn decimals_ok(value: f64) -> bool {
        // Rounded-to-cents values survive a cents round trip exactly.
        (value * 100.0 - (value * 100.0).round()).abs() < 1e-9
    }

    #[test]
    fn test_fixed_draws_produce_exact_quote() {
        let entropy = FixedEntropy { price_shift: 0.01, ..FixedEntropy::calm() };
        let clock = FixedClock(chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());

        let quote = generate_quote("AAPL", 180.0, &entropy, &clock);

        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, 181.8);
        assert!(quote.bid <= quote.price && quote.price <= quote.ask);
        assert_eq!(quote.timestamp, clock.0);
    }

    #[test]
    fn test_invariants_hold_under_random_entropy() {
        let entropy = ThreadRngEntropy;
        let clock = crate::engine::SystemClock;

        for _ in 0..2_000 {
            let quote = generate_quote("MSFT", 380.0, &entropy, &clock);

            assert!(quote.bid <= quote.price, "bid above price: {quote:?}");
            assert!(quote.price <= quote.ask, "price above ask: {quote:?}");
            assert!(quote.bid >= 0.0 && quote.price >= 0.0 && quote.ask >= 0.0);

            assert!(decimals_ok(quote.price), "price not cent-rounded: {quote:?}");
            assert!(decimals_ok(quote.bid));
            assert!(decimals_ok(quote.ask));

            // ±2% band around the base, with cent-rounding slack.
            let band = 380.0 * MAX_PRICE_SHIFT + 0.005;
            assert!(
                (quote.price - 380.0).abs() <= band,
                "price escaped the ±2% band: {quote:?}"
            );
        }
    }

    #[test]
    fn test_spread_is_bounded() {
        let entropy = ThreadRngEntropy;
        let clock = crate::engine::SystemClock;

        for _ in 0..2_000 {
            let quote = generate_quote("GOOGL", 140.0, &entropy, &clock);
            // Rounding each side to cents can widen the gap by up to one cent.
            let max_spread = quote.price * SPREAD_FRACTION_MAX + 0.01;
            assert!(quote.spread() >= 0.0);
            assert!(quote.spread() <= max_spread, "spread too wide: {quote:?}");
        }
    }
}
