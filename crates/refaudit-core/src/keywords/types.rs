//! Keyword set types - Vocabulary configuration for the policy engine

use serde::{Deserialize, Serialize};

/// The four vocabulary groups the policy engine is parameterized by.
///
/// Built once at startup and treated as read-only for the process
/// lifetime. Classification is a pure function of the record, this set,
/// and the compiled pattern catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordSet {
    /// Document-type codes that count as a primary reference (AMM, SRM, ...)
    pub primary_references: Vec<String>,
    /// Connector words joining a narrative to a cited document (IAW, REF, PER)
    pub linking_words: Vec<String>,
    /// Procedural phrases that are compliant by definition
    pub skip_phrases: Vec<String>,
    /// Header labels marking setup/close-up tasks exempt from citation
    pub header_skip_keywords: Vec<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self {
            primary_references: to_strings(&[
                "AMM", "SRM", "CMM", "EMM", "SOPM", "SWPM",
                "IPD", "FIM", "TSM", "IPC", "SB", "AD",
                "NTO", "MEL", "NEF", "MME", "LMM", "NTM", "DWG", "AIPC", "AMMS",
                "DDG", "VSB", "BSI", "FTD", "TIPF", "MNT", "EEL VNA", "EO EOD",
            ]),
            linking_words: to_strings(&["IAW", "REF", "PER", "I.A.W"]),
            // Only phrases that are purely procedural and never carry a
            // reference belong here.
            skip_phrases: to_strings(&[
                "GET ACCESS", "GAIN ACCESS", "GAINED ACCESS", "ACCESS GAINED",
                "SPARE ORDERED", "ORDERED SPARE",
                "OBEY ALL", "FOLLOW ALL", "COMPLY WITH",
                "MEASURE AND RECORD", "SET TO INACTIVE",
                "SEE FIGURE", "REFER TO FIGURE",
            ]),
            header_skip_keywords: to_strings(&[
                "CLOSE UP", "CLOSEUP",
                "JOB SET UP", "JOB SETUP", "JOBSETUP",
                "OPEN ACCESS", "OPENACCESS",
                "CLOSE ACCESS", "CLOSEACCESS",
                "GENERAL", "JOB SET-UP", "JOB CLOSE-UP",
            ]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
