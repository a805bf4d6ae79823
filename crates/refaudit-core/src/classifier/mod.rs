//! Classification engine module
//!
//! Orchestrates the normalizer and pattern catalog into an ordered
//! decision pipeline producing one compliance state per record.

mod engine;
mod types;

pub use engine::Classifier;
pub use types::{ComplianceState, Field, NarrativeRecord};
