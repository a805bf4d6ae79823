//! refaudit-core: documentation-compliance policy engine
//!
//! Classifies free-text maintenance-action narratives against a
//! documentation-compliance policy, deciding whether each work-order line
//! cites an approved reference manual and a revision/date:
//! - Keywords: the four vocabulary groups the policy is parameterized by
//! - Normalizer: deterministic, idempotent typo repair
//! - Patterns: compiled catalog of named boolean text predicates
//! - Classifier: the ordered, short-circuiting decision pipeline
//! - Batch: parallel evaluation of independent records with tallies
//!
//! The engine detects textual clues that a reference was cited; it never
//! verifies that the cited document exists or matches the task.

pub mod batch;
pub mod classifier;
pub mod keywords;
pub mod normalizer;
pub mod patterns;

// Re-exports for convenience
pub use batch::{classify_all, BatchReport, BatchTally};
pub use classifier::{Classifier, ComplianceState, Field, NarrativeRecord};
pub use keywords::{KeywordError, KeywordSet};
pub use normalizer::Normalizer;
pub use patterns::{
    has_revision_indicator, seq_auto_valid, PatternCatalog, SEQ_AUTO_VALID_PREFIXES,
};
