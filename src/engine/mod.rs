//! Simulation engine: quote synthesis plus the pluggable randomness and
//! clock sources that drive it.

pub mod entropy;
pub mod generator;

pub use entropy::{Clock, Entropy, SystemClock, ThreadRngEntropy};
pub use generator::generate_quote;
