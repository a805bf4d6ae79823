//! Typo repair for maintenance narratives
//!
//! Technicians routinely glue tokens together ("REV156", "REFAMM52-11-01")
//! or double up whitespace. Pattern matching runs on repaired text, so the
//! repairs must be deterministic and idempotent: repairing already-repaired
//! text changes nothing. Replacements preserve the casing of the original
//! token to keep that property.

use regex::{Captures, Regex};

use crate::keywords::KeywordSet;

/// Deterministic string cleanup applied before pattern matching.
///
/// Compiled once from a [`KeywordSet`]; `normalize` is a pure function.
pub struct Normalizer {
    /// "X)rev12" / "01REV156" - revision token glued to the previous word
    rev_after_token: Regex,
    /// "REV156" / "REV:156" / "rev.156" - separator squeezed out
    rev_separated: Regex,
    /// "REFAMM..." - linking token glued to the next word
    ref_letter: Regex,
    /// "AMM52-11-01" - primary-reference code glued to a chapter number
    keyword_digit: Option<Regex>,
    /// Runs of 2+ whitespace characters
    whitespace: Regex,
}

impl Normalizer {
    pub fn new(keywords: &KeywordSet) -> Self {
        let keyword_digit = if keywords.primary_references.is_empty() {
            None
        } else {
            let alternation = keywords
                .primary_references
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                Regex::new(&format!(r"(?i)\b({})(\d)", alternation))
                    .expect("invalid keyword pattern"),
            )
        };

        Self {
            rev_after_token: Regex::new(r"(?i)([A-Za-z0-9)\]])(REV)(\d+)\b")
                .expect("invalid rev pattern"),
            rev_separated: Regex::new(r"(?i)\b(REV)[:.]?\s*(\d+)\b")
                .expect("invalid rev pattern"),
            ref_letter: Regex::new(r"(?i)\b(REF)([A-Z][A-Za-z0-9]*)")
                .expect("invalid ref pattern"),
            keyword_digit,
            whitespace: Regex::new(r"\s{2,}").expect("invalid whitespace pattern"),
        }
    }

    /// Repair common typos so the pattern catalog sees separable tokens.
    ///
    /// Applies, in order: revision-token splitting, REF splitting,
    /// reference-code/digit splitting, whitespace collapsing.
    pub fn normalize(&self, raw: &str) -> String {
        let t = self
            .rev_after_token
            .replace_all(raw, "${1} ${2} ${3}")
            .into_owned();
        let t = self.rev_separated.replace_all(&t, "${1} ${2}").into_owned();
        let t = self
            .ref_letter
            .replace_all(&t, |caps: &Captures<'_>| {
                let rest = &caps[2];
                // "REFERENCED AMM ..." is a citation idiom the classifier
                // matches on verbatim; splitting it would hide it.
                if starts_with_ignore_case(rest, "ERENCED") {
                    caps[0].to_string()
                } else {
                    format!("{} {}", &caps[1], rest)
                }
            })
            .into_owned();
        let t = match &self.keyword_digit {
            Some(re) => re.replace_all(&t, "${1} ${2}").into_owned(),
            None => t,
        };
        self.whitespace.replace_all(&t, " ").into_owned()
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(&KeywordSet::default())
    }

    #[test]
    fn collapses_whitespace_runs() {
        let n = normalizer();
        assert_eq!(n.normalize("IAW  AMM   52-11-01"), "IAW AMM 52-11-01");
    }

    #[test]
    fn splits_glued_revision_token() {
        let n = normalizer();
        assert_eq!(n.normalize("REV156"), "REV 156");
        assert_eq!(n.normalize("rev156"), "rev 156");
        assert_eq!(n.normalize("REV:156"), "REV 156");
        assert_eq!(n.normalize("X)rev12"), "X) rev 12");
    }

    #[test]
    fn splits_ref_from_following_word() {
        let n = normalizer();
        assert_eq!(n.normalize("REFAMM 52-11-01"), "REF AMM 52-11-01");
    }

    #[test]
    fn keeps_referenced_idiom_intact() {
        let n = normalizer();
        assert_eq!(
            n.normalize("REFERENCED AMM 52-11-01"),
            "REFERENCED AMM 52-11-01"
        );
    }

    #[test]
    fn splits_reference_code_from_chapter_number() {
        let n = normalizer();
        assert_eq!(n.normalize("IAW AMM52-11-01"), "IAW AMM 52-11-01");
        assert_eq!(n.normalize("PER SRM54-21-03"), "PER SRM 54-21-03");
    }

    #[test]
    fn repairs_fully_glued_citation() {
        let n = normalizer();
        assert_eq!(
            n.normalize("REFAMM52-11-01REV156"),
            "REF AMM 52-11-01 REV 156"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let n = normalizer();
        for raw in [
            "REFAMM52-11-01REV156",
            "IAW  AMM   52-11-01 REV:156",
            "REFERENCED AMM 52-11-01",
            "X)rev12 done",
            "plain narrative with no citations",
            "",
        ] {
            let once = n.normalize(raw);
            assert_eq!(n.normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn empty_keyword_set_still_repairs_revisions() {
        let n = Normalizer::new(&KeywordSet {
            primary_references: vec![],
            ..KeywordSet::default()
        });
        assert_eq!(n.normalize("REV156"), "REV 156");
    }
}
