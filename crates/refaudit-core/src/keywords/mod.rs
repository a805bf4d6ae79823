//! Keyword configuration module
//!
//! Provides the vocabulary groups (primary reference codes, linking words,
//! skip phrases, header skip keywords) the classifier is parameterized by,
//! plus JSON file loading with default merging.

mod loader;
mod types;

pub use loader::KeywordError;
pub use types::KeywordSet;
