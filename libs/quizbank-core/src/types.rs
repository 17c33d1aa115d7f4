//! Shared record types for the question bank.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Content module recovered from a source label, e.g. `MD3`.
///
/// Serialized as its display form (`MD3` / `Other`). Unrecognized strings
/// deserialize to `Other`, the same sentinel the label heuristics fall
/// back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Md(u32),
    Other,
}

impl Default for Module {
    fn default() -> Self {
        Self::Other
    }
}

impl Module {
    /// Parse the display form back into a module tag.
    pub fn from_str(s: &str) -> Option<Self> {
        if s == "Other" {
            return Some(Self::Other);
        }
        s.strip_prefix("MD")?.parse().ok().map(Self::Md)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Md(number) => write!(f, "MD{}", number),
            Self::Other => f.write_str("Other"),
        }
    }
}

impl Serialize for Module {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Module {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_str(&s).unwrap_or(Self::Other))
    }
}

/// Difficulty tier recovered from a source label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Hard,
    Medium,
    Easy,
    Unknown,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Difficulty {
    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hard => "Hard",
            Self::Medium => "Medium",
            Self::Easy => "Easy",
            Self::Unknown => "Unknown",
        }
    }
}

/// One answer choice attached to a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
    /// Shared explanation; identical across all options of a question.
    pub rationale: String,
}

/// One fully assembled multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub question: String,
    /// Always empty at parse time; reserved for downstream use.
    pub hint: String,
    /// Options in their original letter order.
    pub answer_options: Vec<AnswerOption>,
    /// Label of the originating source, verbatim.
    pub source: String,
    pub module: Module,
    pub difficulty: Difficulty,
    /// Present only when the block carried a `Q<n>.` tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_number: Option<u32>,
}
