//! Domain models shared across the service.

pub mod quote;
pub mod registry;

pub use quote::Quote;
pub use registry::SymbolRegistry;
