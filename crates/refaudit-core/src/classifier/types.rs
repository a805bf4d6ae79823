//! Classifier types - Input records and compliance states

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// One input cell from a work-order export.
///
/// Spreadsheet exports hand us strings, numbers, and empty cells
/// interchangeably; the serde representation is untagged so JSON rows
/// (string / number / null) map directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    #[default]
    Missing,
    Number(f64),
    Text(String),
}

impl Field {
    pub fn text(value: impl Into<String>) -> Self {
        Field::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        Field::Number(value)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    /// Coerce to text for matching. Numbers render the way the source
    /// system stringifies them (whole floats keep one decimal, so a SEQ
    /// of 10.0 reads "10.0" and still satisfies the "10." prefix).
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Field::Missing => None,
            Field::Number(n) => Some(Cow::Owned(render_number(*n))),
            Field::Text(t) => Some(Cow::Borrowed(t)),
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Number(value)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Field::Missing)
    }
}

fn render_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{n:.1}")
    } else {
        n.to_string()
    }
}

/// One maintenance work-order line. Immutable input; the engine never
/// mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NarrativeRecord {
    /// Maintenance-action narrative text
    #[serde(default)]
    pub text: Field,
    /// Task-sequence code
    #[serde(default)]
    pub seq: Field,
    /// Work-order action header
    #[serde(default)]
    pub header: Field,
    /// Secondary descriptive field (DES)
    #[serde(default)]
    pub des: Field,
}

impl NarrativeRecord {
    pub fn new(
        text: impl Into<Field>,
        seq: impl Into<Field>,
        header: impl Into<Field>,
        des: impl Into<Field>,
    ) -> Self {
        Self {
            text: text.into(),
            seq: seq.into(),
            header: header.into(),
            des: des.into(),
        }
    }
}

/// The engine's sole output per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplianceState {
    /// Citation and revision requirements are satisfied (or waived)
    Valid,
    /// A reference was expected but none was cited
    MissingReference,
    /// A reference was cited without a revision or date
    MissingRevision,
    /// Blank or N/A input, preserved verbatim (original casing kept)
    NotApplicable(String),
}

impl ComplianceState {
    /// The stable report label: "Valid", "Missing reference",
    /// "Missing revision", or the preserved original text.
    pub fn label(&self) -> &str {
        match self {
            ComplianceState::Valid => "Valid",
            ComplianceState::MissingReference => "Missing reference",
            ComplianceState::MissingRevision => "Missing revision",
            ComplianceState::NotApplicable(original) => original,
        }
    }
}

impl fmt::Display for ComplianceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ComplianceState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
