pub mod cli;
pub mod config;
pub mod engine;
pub mod input;
pub mod report;

pub use config::Config;
pub use engine::tokenizer::Language;
pub use engine::{compare_texts, ErrorKind, Severity, TokenStatus};

use serde::{Deserialize, Serialize};

/// Outcome of scoring one recognized text against a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub accuracy: f64,
    pub aligned_tokens: Vec<AlignedToken>,
    pub errors: Vec<TextError>,
    pub statistics: Statistics,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_words: usize,
    pub correct_words: usize,
    /// Rows classified as `Error`. Near-misses are counted separately.
    pub error_count: usize,
    pub near_miss_count: usize,
}

/// One row of an alignment.
///
/// `reference` is empty for extra rows and `recognized` is empty for missing
/// rows. `position` indexes the reference sequence and is `None` for extra rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedToken {
    pub reference: String,
    pub recognized: String,
    pub status: TokenStatus,
    pub confidence: f64,
    #[serde(with = "position")]
    pub position: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub expected: String,
    pub actual: String,
    #[serde(with = "position")]
    pub position: Option<usize>,
    pub severity: Severity,
}

/// Positions go over the wire as integers, with `-1` standing for "no
/// reference counterpart".
mod position {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(index) => serializer.serialize_i64(*index as i64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(usize::try_from(raw).ok())
    }
}
