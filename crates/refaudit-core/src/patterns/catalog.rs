//! Compiled predicate catalog
//!
//! Fixed document-identifier patterns are compiled once into statics;
//! vocabulary-derived patterns are compiled when the catalog is built from
//! a [`KeywordSet`]. Every predicate is case-insensitive, word-boundary
//! aware, and infallible at match time.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::keywords::KeywordSet;
use crate::patterns::revision::has_revision_indicator;

/// Task-sequence prefixes exempt from citation requirements.
pub const SEQ_AUTO_VALID_PREFIXES: [&str; 4] = ["1.", "2.", "3.", "10."];

/// "NDT REPORT" followed by an alphanumeric identifier
static NDT_REPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bNDT\s+REPORT\s*[:#\-]?\s*[A-Z0-9][A-Z0-9/\-]*").unwrap()
});

/// "SB" followed by a fully qualified dash-delimited part number
static SB_FULL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bSB\s*-?\s*[A-Z0-9]+(?:-[A-Z0-9]+){2,}\b").unwrap());

/// "DATA MODULE TASK" followed by a number
static DATA_MODULE_TASK_NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bDATA\s+MODULE\s+TASK\s*[:#\-]?\s*\d+").unwrap());

/// "DATA MODULE TASK" with or without a number
static DATA_MODULE_TASK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bDATA\s+MODULE\s+TASK\b").unwrap());

/// Data-module code (DMC-...)
static DMC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bDMC[-\s]?[A-Z0-9]+(?:-[A-Z0-9]+)+\b").unwrap());

/// Airframe document code (B787-...)
static AIRFRAME_DOC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bB787-[A-Z0-9]+(?:-[A-Z0-9]+)+\b").unwrap());

/// Long-form document identifier: letter-led, dash-delimited, 4+ segments.
/// Deliberately does NOT match bare chapter numbers like "52-11-01" -
/// those carry no document type and must not satisfy the identifier
/// escape hatch.
static GENERIC_DOC_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[A-Z][A-Z0-9]*(?:-[A-Z0-9]+){3,}\b").unwrap());

/// True if the trimmed, stringified SEQ value starts with an auto-valid
/// prefix. A literal prefix test: "1.10" and "1.2" both satisfy "1.".
pub fn seq_auto_valid(seq: &str) -> bool {
    let s = seq.trim();
    !s.is_empty() && SEQ_AUTO_VALID_PREFIXES.iter().any(|p| s.starts_with(p))
}

/// Named boolean text predicates over normalized narrative text.
pub struct PatternCatalog {
    primary: Option<Regex>,
    linking: Option<Regex>,
    referenced: Option<Regex>,
    skip_phrases: Vec<String>,
    header_skip: Vec<String>,
}

impl PatternCatalog {
    pub fn new(keywords: &KeywordSet) -> Self {
        let referenced = word_alternation(&keywords.primary_references).map(|alt| {
            Regex::new(&format!(r"(?i)\bREFERENCED\s+(?:{alt})\b"))
                .expect("invalid referenced pattern")
        });

        Self {
            primary: word_bounded(&keywords.primary_references),
            linking: word_bounded(&keywords.linking_words),
            referenced,
            skip_phrases: uppercased(&keywords.skip_phrases),
            header_skip: uppercased(&keywords.header_skip_keywords),
        }
    }

    /// Text contains a configured document-type code as a standalone word.
    pub fn primary_reference(&self, text: &str) -> bool {
        matches_opt(&self.primary, text)
    }

    /// Text contains a configured connector word (IAW, REF, PER, ...).
    pub fn linking_word(&self, text: &str) -> bool {
        matches_opt(&self.linking, text)
    }

    /// "REFERENCED" immediately followed by a primary-reference code.
    pub fn referenced_primary(&self, text: &str) -> bool {
        matches_opt(&self.referenced, text)
    }

    /// Text contains a procedural phrase that is compliant by definition.
    pub fn skip_phrase(&self, text: &str) -> bool {
        let upper = text.to_uppercase();
        self.skip_phrases.iter().any(|p| upper.contains(p))
    }

    /// Header text contains a procedural header label (setup, close-up, ...).
    pub fn header_skip_keyword(&self, header: &str) -> bool {
        let normalized = header
            .to_uppercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        self.header_skip.iter().any(|k| normalized.contains(k))
    }

    /// "NDT REPORT" followed by an identifier.
    pub fn ndt_report(&self, text: &str) -> bool {
        NDT_REPORT.is_match(text)
    }

    /// Service bulletin with a fully qualified part number.
    pub fn service_bulletin_full(&self, text: &str) -> bool {
        SB_FULL.is_match(text)
    }

    /// "DATA MODULE TASK" followed by a number.
    pub fn data_module_task_numbered(&self, text: &str) -> bool {
        DATA_MODULE_TASK_NUMBERED.is_match(text)
    }

    /// A structured document identifier with no recognized document type:
    /// a DMC/airframe code, or "DATA MODULE TASK" naming no number.
    pub fn dmc_or_doc_id(&self, text: &str) -> bool {
        DMC.is_match(text)
            || AIRFRAME_DOC.is_match(text)
            || (DATA_MODULE_TASK.is_match(text) && !DATA_MODULE_TASK_NUMBERED.is_match(text))
    }

    /// Long-form dash-delimited document identifier.
    pub fn generic_doc_id(&self, text: &str) -> bool {
        GENERIC_DOC_ID.is_match(text)
    }

    /// Any revision, issue number, or applicability date.
    pub fn revision_indicator(&self, text: &str) -> bool {
        has_revision_indicator(text)
    }
}

fn matches_opt(pattern: &Option<Regex>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

fn uppercased(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.to_uppercase()).collect()
}

fn word_alternation(keywords: &[String]) -> Option<String> {
    if keywords.is_empty() {
        // An empty alternation would match everywhere; absent vocabulary
        // must match nothing.
        return None;
    }
    Some(
        keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|"),
    )
}

fn word_bounded(keywords: &[String]) -> Option<Regex> {
    word_alternation(keywords).map(|alt| {
        Regex::new(&format!(r"(?i)\b(?:{alt})\b")).expect("invalid keyword pattern")
    })
}
