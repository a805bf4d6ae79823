//! Parallel batch evaluation
//!
//! Records are independent and the classifier holds no mutable state, so
//! a batch can be evaluated with unbounded parallelism and no ordering
//! guarantee. Output states are still returned in input order.

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::classifier::{Classifier, ComplianceState, NarrativeRecord};

/// Per-state tallies for a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchTally {
    pub valid: usize,
    pub missing_reference: usize,
    pub missing_revision: usize,
    pub not_applicable: usize,
}

impl BatchTally {
    pub fn add(&mut self, state: &ComplianceState) {
        match state {
            ComplianceState::Valid => self.valid += 1,
            ComplianceState::MissingReference => self.missing_reference += 1,
            ComplianceState::MissingRevision => self.missing_revision += 1,
            ComplianceState::NotApplicable(_) => self.not_applicable += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.valid + self.missing_reference + self.missing_revision + self.not_applicable
    }
}

/// Result of evaluating a batch of records.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// One state per input record, in input order
    pub states: Vec<ComplianceState>,
    /// Per-state tallies
    pub tally: BatchTally,
    /// Records evaluated
    pub records: usize,
    /// Evaluation duration in milliseconds
    pub duration_ms: u64,
}

/// Classify every record in parallel, preserving input order.
pub fn classify_all(classifier: &Classifier, records: &[NarrativeRecord]) -> Vec<ComplianceState> {
    records
        .par_iter()
        .map(|record| classifier.classify(record))
        .collect()
}

/// Classify a batch and aggregate per-state tallies.
pub fn run(classifier: &Classifier, records: &[NarrativeRecord]) -> BatchReport {
    let start = Instant::now();

    let states = classify_all(classifier, records);
    let mut tally = BatchTally::default();
    for state in &states {
        tally.add(state);
    }

    BatchReport {
        records: states.len(),
        tally,
        states,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}
