//! Batch evaluation module
//!
//! Rayon-parallel classification of independent records with per-state
//! tallies. Spreadsheet I/O stays with the surrounding driver.

mod runner;

pub use runner::{classify_all, run, BatchReport, BatchTally};
