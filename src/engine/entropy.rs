//! # engine::entropy
//!
//! Every random draw and every timestamp in the service flows through the
//! [`Entropy`] and [`Clock`] traits held in `AppState`.
//!
//! This keeps the fault-injection policy out of the handlers: production uses
//! [`ThreadRngEntropy`] / [`SystemClock`], while tests swap in deterministic
//! implementations to force the no-fault branch or a zero-length sleep
//! without touching any global random state.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

// ─── Simulation constants ─────────────────────────────────────────────────────

/// Maximum relative price move per request: ±2% of the base price.
pub const MAX_PRICE_SHIFT: f64 = 0.02;

/// Spread fraction bounds: [0.01%, 0.05%] of the perturbed price.
pub const SPREAD_FRACTION_MIN: f64 = 0.0001;
pub const SPREAD_FRACTION_MAX: f64 = 0.0005;

/// Simulated per-request latency bounds.
pub const LATENCY_MIN: Duration = Duration::from_millis(100);
pub const LATENCY_MAX: Duration = Duration::from_millis(500);

/// Probability that a `/prices` request fails with a synthetic 500.
pub const FAULT_PROBABILITY: f64 = 0.05;

// ─── Traits ───────────────────────────────────────────────────────────────────

/// Source of all simulation randomness.
pub trait Entropy: Send + Sync {
    /// Relative price perturbation, uniform in `[-MAX_PRICE_SHIFT, +MAX_PRICE_SHIFT]`.
    fn price_shift(&self) -> f64;

    /// Spread as a fraction of price, uniform in `[SPREAD_FRACTION_MIN, SPREAD_FRACTION_MAX]`.
    fn spread_fraction(&self) -> f64;

    /// Simulated network/processing latency, uniform in `[LATENCY_MIN, LATENCY_MAX]`.
    fn latency(&self) -> Duration;

    /// Whether this request should fail with a synthetic internal error.
    fn inject_fault(&self) -> bool;
}

/// Source of timestamps attached to quotes.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// ─── Production implementations ───────────────────────────────────────────────

/// Production entropy backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngEntropy;

impl Entropy for ThreadRngEntropy {
    fn price_shift(&self) -> f64 {
        rand::rng().random_range(-MAX_PRICE_SHIFT..=MAX_PRICE_SHIFT)
    }

    fn spread_fraction(&self) -> f64 {
        rand::rng().random_range(SPREAD_FRACTION_MIN..=SPREAD_FRACTION_MAX)
    }

    fn latency(&self) -> Duration {
        let millis = rand::rng()
            .random_range(LATENCY_MIN.as_millis() as u64..=LATENCY_MAX.as_millis() as u64);
        Duration::from_millis(millis)
    }

    fn inject_fault(&self) -> bool {
        rand::rng().random_range(0.0..1.0) < FAULT_PROBABILITY
    }
}

/// Wall-clock timestamps.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ─── Deterministic implementations (test builds only) ─────────────────────────

/// Fixed-value entropy so tests can pin every draw.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy {
    pub price_shift: f64,
    pub spread_fraction: f64,
    pub latency: Duration,
    pub inject_fault: bool,
}

#[cfg(test)]
impl FixedEntropy {
    /// No perturbation, minimal spread, zero sleep, never faults.
    pub fn calm() -> Self {
        Self {
            price_shift: 0.0,
            spread_fraction: SPREAD_FRACTION_MIN,
            latency: Duration::ZERO,
            inject_fault: false,
        }
    }

    /// Zero sleep, always faults.
    pub fn faulty() -> Self {
        Self { inject_fault: true, ..Self::calm() }
    }
}

#[cfg(test)]
impl Entropy for FixedEntropy {
    fn price_shift(&self) -> f64 {
        self.price_shift
    }

    fn spread_fraction(&self) -> f64 {
        self.spread_fraction
    }

    fn latency(&self) -> Duration {
        self.latency
    }

    fn inject_fault(&self) -> bool {
        self.inject_fault
    }
}

/// Clock frozen at a fixed instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_stay_in_bounds() {
        let entropy = ThreadRngEntropy;
        for _ in 0..1_000 {
            let shift = entropy.price_shift();
            assert!((-MAX_PRICE_SHIFT..=MAX_PRICE_SHIFT).contains(&shift));

            let frac = entropy.spread_fraction();
            assert!((SPREAD_FRACTION_MIN..=SPREAD_FRACTION_MAX).contains(&frac));

            let latency = entropy.latency();
            assert!(latency >= LATENCY_MIN && latency <= LATENCY_MAX);
        }
    }

    #[test]
    fn test_fault_rate_converges_to_five_percent() {
        let entropy = ThreadRngEntropy;
        let samples = 100_000;
        let faults = (0..samples).filter(|_| entropy.inject_fault()).count();
        let rate = faults as f64 / samples as f64;

        // 5% ± generous sampling tolerance; ~3 std devs is well under 1%.
        assert!(
            (rate - FAULT_PROBABILITY).abs() < 0.01,
            "empirical fault rate {rate} too far from {FAULT_PROBABILITY}"
        );
    }
}
