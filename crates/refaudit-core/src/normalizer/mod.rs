//! Text normalizer module
//!
//! Deterministic, idempotent typo repair that all pattern matching
//! operates on.

mod typos;

pub use typos::Normalizer;
