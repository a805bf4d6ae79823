//! Classification engine - ordered, short-circuiting compliance policy
//!
//! Evaluates one narrative record against a priority-ordered decision
//! list. Stage order is semantically significant: overrides (SEQ, header)
//! run before blank handling, blank handling before skip phrases, skip
//! phrases before typo repair, and the citation idioms before the
//! reference/revision checks. Every input shape yields a state; the
//! engine never fails.

use crate::classifier::types::{ComplianceState, Field, NarrativeRecord};
use crate::keywords::KeywordSet;
use crate::normalizer::Normalizer;
use crate::patterns::{seq_auto_valid, PatternCatalog};

/// Blank sentinels preserved verbatim instead of classified.
const BLANK_SENTINELS: [&str; 3] = ["N/A", "NA", "NONE"];

/// The compliance classifier. Built once from a [`KeywordSet`];
/// classification is pure and shares no mutable state, so one classifier
/// may serve any number of threads concurrently.
pub struct Classifier {
    keywords: KeywordSet,
    normalizer: Normalizer,
    patterns: PatternCatalog,
}

impl Classifier {
    pub fn new(keywords: KeywordSet) -> Self {
        let normalizer = Normalizer::new(&keywords);
        let patterns = PatternCatalog::new(&keywords);
        Self {
            keywords,
            normalizer,
            patterns,
        }
    }

    /// Classifier over the built-in production vocabulary.
    pub fn with_defaults() -> Self {
        Self::new(KeywordSet::default())
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn patterns(&self) -> &PatternCatalog {
        &self.patterns
    }

    /// Classify loose fields; the single operation exposed to batch
    /// drivers.
    pub fn classify_fields(
        &self,
        text: impl Into<Field>,
        seq: impl Into<Field>,
        header: impl Into<Field>,
        des: impl Into<Field>,
    ) -> ComplianceState {
        self.classify(&NarrativeRecord::new(text, seq, header, des))
    }

    /// Classify one record into exactly one compliance state.
    pub fn classify(&self, record: &NarrativeRecord) -> ComplianceState {
        // Stage 0: whitelisted task-sequence prefixes are exempt
        if let Some(seq) = record.seq.as_text() {
            if seq_auto_valid(&seq) {
                return ComplianceState::Valid;
            }
        }

        // Stage 1: procedural headers (setup, close-up, ...) are exempt
        if let Some(header) = record.header.as_text() {
            if self.patterns.header_skip_keyword(&header) {
                return ComplianceState::Valid;
            }
        }

        // Stage 2: preserve blank / N/A rows verbatim. A numeric cell in
        // the text column is the exporter's missing-value sentinel.
        let text = match &record.text {
            Field::Missing | Field::Number(_) => {
                return ComplianceState::NotApplicable("N/A".to_string())
            }
            Field::Text(t) => t,
        };
        let trimmed = text.trim();
        let upper = trimmed.to_uppercase();
        if upper.is_empty() || BLANK_SENTINELS.contains(&upper.as_str()) {
            return ComplianceState::NotApplicable(trimmed.to_string());
        }

        // Stage 3: purely procedural phrases are compliant by definition
        if self.patterns.skip_phrase(trimmed) {
            return ComplianceState::Valid;
        }

        // Stage 4: all remaining stages run on repaired text
        let cleaned = self.normalizer.normalize(trimmed);

        // Stage 5: citation idioms that are complete on their own
        if self.patterns.referenced_primary(&cleaned) {
            return ComplianceState::Valid;
        }
        if self.patterns.ndt_report(&cleaned) {
            return ComplianceState::Valid;
        }
        let sb_full = self.patterns.service_bulletin_full(&cleaned);
        if sb_full && self.patterns.data_module_task_numbered(&cleaned) {
            return ComplianceState::Valid;
        }
        let linking = self.patterns.linking_word(&cleaned);
        if sb_full && linking {
            return ComplianceState::Valid;
        }

        // Stage 6: a narrative citing no document type is only penalized
        // when the row's own DES context shows a reference was expected
        if !self.patterns.primary_reference(&cleaned) {
            return if self.des_has_reference(&record.des) {
                ComplianceState::MissingReference
            } else {
                ComplianceState::Valid
            };
        }

        // Stage 7: a cited reference needs a revision or date
        if self.patterns.revision_indicator(&cleaned) {
            return ComplianceState::Valid;
        }
        // Stage 7b: a long-form document identifier tied in with a
        // linking word carries its own revision marking
        if linking && self.patterns.generic_doc_id(&cleaned) {
            return ComplianceState::Valid;
        }

        // Stage 8: reference present, revision absent
        ComplianceState::MissingRevision
    }

    /// True if the DES field independently establishes that a reference
    /// was expected on this row: any document type, document identifier,
    /// or citation idiom in the normalized DES text.
    fn des_has_reference(&self, des: &Field) -> bool {
        let Some(raw) = des.as_text() else {
            return false;
        };
        if raw.trim().is_empty() {
            return false;
        }
        let cleaned = self.normalizer.normalize(raw.trim());

        self.patterns.primary_reference(&cleaned)
            || self.patterns.dmc_or_doc_id(&cleaned)
            || self.patterns.ndt_report(&cleaned)
            || self.patterns.service_bulletin_full(&cleaned)
            || self.patterns.data_module_task_numbered(&cleaned)
            || self.patterns.referenced_primary(&cleaned)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::with_defaults()
    }

    fn classify_text(c: &Classifier, text: &str) -> ComplianceState {
        c.classify_fields(text, Field::Missing, Field::Missing, Field::Missing)
    }

    #[test]
    fn full_citation_with_revision_is_valid() {
        let c = classifier();
        assert_eq!(
            classify_text(&c, "ACCOMPLISHED IAW AMM 52-11-01 REV 156"),
            ComplianceState::Valid
        );
        assert_eq!(
            classify_text(&c, "REF SRM 54-21-03 ISSUE 002"),
            ComplianceState::Valid
        );
    }

    #[test]
    fn citation_without_revision_is_missing_revision() {
        let c = classifier();
        assert_eq!(
            classify_text(&c, "IAW AMM 52-11-01"),
            ComplianceState::MissingRevision
        );
        assert_eq!(
            classify_text(&c, "IAW AMM 52-11-01 REV 156"),
            ComplianceState::Valid
        );
    }

    #[test]
    fn seq_override_short_circuits_everything() {
        let c = classifier();
        for seq in ["1.5", "2.1", "3.99", "10.3"] {
            assert_eq!(
                c.classify_fields("GARBAGE", seq, "ANYTHING", "IAW AMM 21-01"),
                ComplianceState::Valid,
                "seq {seq}"
            );
        }
        // Numeric SEQ cells are coerced to strings before the prefix test
        assert_eq!(
            c.classify_fields("GARBAGE", 1.5, Field::Missing, Field::Missing),
            ComplianceState::Valid
        );
        assert_eq!(
            c.classify_fields("GARBAGE", 10.0, Field::Missing, Field::Missing),
            ComplianceState::Valid
        );
    }

    #[test]
    fn non_whitelisted_seq_does_not_override() {
        let c = classifier();
        assert_eq!(
            c.classify_fields("IAW AMM 52-11-01", "4.2", Field::Missing, Field::Missing),
            ComplianceState::MissingRevision
        );
    }

    #[test]
    fn header_override_applies_when_seq_does_not() {
        let c = classifier();
        assert_eq!(
            c.classify_fields("", "77.1", "JOB SET UP", Field::Missing),
            ComplianceState::Valid
        );
        assert_eq!(
            c.classify_fields("", Field::Missing, "GENERAL", Field::Missing),
            ComplianceState::Valid
        );
    }

    #[test]
    fn blank_passthrough_preserves_original_casing() {
        let c = classifier();
        assert_eq!(
            classify_text(&c, "n/a"),
            ComplianceState::NotApplicable("n/a".to_string())
        );
        assert_eq!(
            classify_text(&c, "  None  "),
            ComplianceState::NotApplicable("None".to_string())
        );
        assert_eq!(
            classify_text(&c, ""),
            ComplianceState::NotApplicable(String::new())
        );
    }

    #[test]
    fn missing_and_numeric_text_are_not_applicable() {
        let c = classifier();
        assert_eq!(
            c.classify_fields(Field::Missing, Field::Missing, Field::Missing, Field::Missing),
            ComplianceState::NotApplicable("N/A".to_string())
        );
        assert_eq!(
            c.classify_fields(3.7, Field::Missing, Field::Missing, Field::Missing),
            ComplianceState::NotApplicable("N/A".to_string())
        );
    }

    #[test]
    fn skip_phrases_win_before_reference_checks() {
        let c = classifier();
        assert_eq!(
            classify_text(&c, "GAINED ACCESS TO ZONE 511"),
            ComplianceState::Valid
        );
        assert_eq!(classify_text(&c, "SPARE ORDERED"), ComplianceState::Valid);
    }

    #[test]
    fn des_context_gates_missing_reference() {
        let c = classifier();
        // No reference anywhere: tolerated
        assert_eq!(
            c.classify_fields(
                "REMOVED AND REPLACED COMPONENT",
                Field::Missing,
                Field::Missing,
                Field::Missing
            ),
            ComplianceState::Valid
        );
        // DES establishes a reference was expected
        assert_eq!(
            c.classify_fields(
                "REMOVED AND REPLACED COMPONENT",
                Field::Missing,
                Field::Missing,
                "IAW AMM 21-01"
            ),
            ComplianceState::MissingReference
        );
        // Blank DES behaves like missing DES
        assert_eq!(
            c.classify_fields(
                "REMOVED AND REPLACED COMPONENT",
                Field::Missing,
                Field::Missing,
                "   "
            ),
            ComplianceState::Valid
        );
    }

    #[test]
    fn des_doc_id_without_type_still_expects_reference() {
        let c = classifier();
        assert_eq!(
            c.classify_fields(
                "CLEANED AND INSPECTED",
                Field::Missing,
                Field::Missing,
                "DMC-B787-A-52-09-01-00A-280A-A"
            ),
            ComplianceState::MissingReference
        );
    }

    #[test]
    fn citation_idioms_are_valid_without_separate_revision() {
        let c = classifier();
        assert_eq!(
            classify_text(&c, "REFERENCED AMM 52-11-01"),
            ComplianceState::Valid
        );
        assert_eq!(
            classify_text(&c, "NDT REPORT 2024-0113 SATIS"),
            ComplianceState::Valid
        );
        assert_eq!(
            classify_text(&c, "DATA MODULE TASK 521102 IAW SB B787-81-0099-00"),
            ComplianceState::Valid
        );
        assert_eq!(
            classify_text(&c, "PER SB 145-32-008 ACCOMPLISHED"),
            ComplianceState::Valid
        );
    }

    #[test]
    fn doc_id_with_linking_word_stands_in_for_revision() {
        let c = classifier();
        assert_eq!(
            classify_text(&c, "IAW AMM DMC-B787-A-21-52-38-00A-520A-A"),
            ComplianceState::Valid
        );
    }

    #[test]
    fn glued_typos_are_repaired_before_matching() {
        let c = classifier();
        assert_eq!(
            classify_text(&c, "REFAMM52-11-01REV156"),
            ComplianceState::Valid
        );
        assert_eq!(
            classify_text(&c, "IAW AMM52-11-01 REV:156"),
            ComplianceState::Valid
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let c = classifier();
        let record = NarrativeRecord::new(
            "IAW AMM 52-11-01 REV 156",
            "5.1",
            "INSPECTION",
            "IAW AMM 21-01",
        );
        let first = c.classify(&record);
        for _ in 0..10 {
            assert_eq!(c.classify(&record), first);
        }
    }

    #[test]
    fn record_is_not_mutated() {
        let c = classifier();
        let record = NarrativeRecord::new("IAW  AMM52-11-01", "4.4", "X", "Y");
        let before = record.clone();
        let _ = c.classify(&record);
        assert_eq!(record, before);
    }
}
