//! # models::registry
//!
//! The fixed symbol universe the service quotes against.
//!
//! The registry maps each symbol code to its base reference price — the
//! center of the random perturbation applied on every request. It is built
//! once at startup and never mutated.

/// One entry in the symbol universe.
#[derive(Debug, Clone, Copy)]
pub struct SymbolEntry {
    /// Symbol code, e.g. `"MSFT"`.
    pub code: &'static str,
    /// Reference price used as the center of per-request perturbation.
    pub base_price: f64,
}

/// Default universe: five large-cap US equities with static reference prices.
const DEFAULT_UNIVERSE: &[SymbolEntry] = &[
    SymbolEntry { code: "AAPL",  base_price: 180.0 },
    SymbolEntry { code: "MSFT",  base_price: 380.0 },
    SymbolEntry { code: "GOOGL", base_price: 140.0 },
    SymbolEntry { code: "AMZN",  base_price: 170.0 },
    SymbolEntry { code: "TSLA",  base_price: 180.0 },
];

/// Immutable symbol → base-price mapping with a stable iteration order.
///
/// `/prices` responses list quotes in exactly this order.
#[derive(Debug, Clone)]
pub struct SymbolRegistry {
    entries: &'static [SymbolEntry],
}

impl SymbolRegistry {
    /// Registry over a caller-supplied universe.
    pub fn new(entries: &'static [SymbolEntry]) -> Self {
        Self { entries }
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter()
    }
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_UNIVERSE)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
