//! Keyword file loading
//!
//! Keyword sets are persisted as JSON by the surrounding tooling. Loading
//! is the only fallible operation in the crate; everything downstream of a
//! built `KeywordSet` is infallible.

use std::path::Path;

use thiserror::Error;

use super::types::KeywordSet;

/// Errors raised while loading a keyword file
#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("failed to read keyword file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("keyword file {path} is not valid JSON")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl KeywordSet {
    /// Load a keyword set from a JSON file.
    ///
    /// Groups absent from the file fall back to the built-in defaults, so
    /// keyword files written before a group existed keep working.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, KeywordError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| KeywordError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| KeywordError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Serialize this keyword set as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
