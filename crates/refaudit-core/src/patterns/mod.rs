//! Pattern library module
//!
//! A fixed catalog of named boolean text predicates: reference codes,
//! document identifiers, revision/date tokens, linking words, skip
//! phrases, header labels, and citation idioms.

mod catalog;
mod revision;

pub use catalog::{seq_auto_valid, PatternCatalog, SEQ_AUTO_VALID_PREFIXES};
pub use revision::has_revision_indicator;
