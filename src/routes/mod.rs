//! Axum route handlers.

pub mod ops;
pub mod prices;
