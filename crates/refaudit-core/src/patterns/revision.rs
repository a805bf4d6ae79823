//! Revision indicator detection
//!
//! A reference citation is only compliant when it carries textual evidence
//! of a revision, issue number, or applicability date. Narratives write
//! these in many shapes: "REV 156", "REV:156", "REV AUG 01/2025",
//! "REV 01AUG 25", "ISSUE 002", "ISSUED SD 45", "EXP 03JAN25",
//! "DEADLINE: 01/11/2025".
//!
//! The REV forms are handled with a lookahead window: a "REV" token counts
//! iff the 12 characters that follow it contain a digit. That one rule
//! covers every REV number/date shape seen in production while rejecting
//! REVIEW/REVERSE/REVENUE and a bare trailing "REV".

use once_cell::sync::Lazy;
use regex::Regex;

const REV_WINDOW: usize = 12;

static REV_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bREV").unwrap());

static ISSUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bISSUE\s*[:.\-]?\s*\d+").unwrap());

static ISSUED_SD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bISSUED\s+SD\s*[:.\-]?\s*\d+").unwrap());

static TAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bTAR\s*[:.\-]?\s*\d+").unwrap());

/// Month-name or slash dates following EXP / DEADLINE / DUE DATE / REV DATE.
/// Shapes: "EXP 03JAN25", "EXP: 28/06/2026", "DEADLINE: 01/11/2025",
/// "DUE DATE 15/03/2025", "REV DATE JAN 15/2025".
static DATED_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    const MONTH: &str = "JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC";
    Regex::new(&format!(
        r"(?i)\b(?:EXP|DEADLINE|DUE\s+DATE|REV\s+DATE)\b\s*[:.\-]?\s*(?:\d{{1,2}}/\d{{1,2}}/\d{{2,4}}|\d{{1,2}}\s*(?:{MONTH})\s*/?\s*\d{{2,4}}|(?:{MONTH})\s*\d{{1,2}}\s*/\s*\d{{2,4}})"
    ))
    .unwrap()
});

/// True if the text contains any revision indicator.
pub fn has_revision_indicator(text: &str) -> bool {
    for m in REV_TOKEN.find_iter(text) {
        let digit_in_window = text[m.end()..]
            .chars()
            .take(REV_WINDOW)
            .any(|c| c.is_ascii_digit());
        if digit_in_window {
            return true;
        }
    }

    ISSUE.is_match(text)
        || ISSUED_SD.is_match(text)
        || TAR.is_match(text)
        || DATED_KEYWORD.is_match(text)
}
