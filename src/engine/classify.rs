use serde::{Deserialize, Serialize};
use std::fmt;

/// Pairs scoring above this are treated as the same word, both for the
/// alignment cost and for classification.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Lower bound (exclusive) of the near-miss band.
pub const NEAR_MISS_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenStatus {
    Correct,
    NearMiss,
    Error,
    Missing,
    Extra,
}

impl TokenStatus {
    /// Status and confidence for a reference/recognized pair with the given
    /// similarity.
    pub fn for_pair(similarity: f64) -> (Self, f64) {
        if similarity > SIMILARITY_THRESHOLD {
            (TokenStatus::Correct, 1.0)
        } else if similarity > NEAR_MISS_THRESHOLD {
            (TokenStatus::NearMiss, similarity)
        } else {
            (TokenStatus::Error, similarity)
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TokenStatus::Correct => "Correct",
            TokenStatus::NearMiss => "Near Miss",
            TokenStatus::Error => "Error",
            TokenStatus::Missing => "Missing",
            TokenStatus::Extra => "Extra",
        }
    }
}

impl fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Missing,
    Extra,
    Substitution,
}

impl ErrorKind {
    /// `None` for correct rows, which produce no error record.
    pub fn from_status(status: TokenStatus) -> Option<Self> {
        match status {
            TokenStatus::Correct => None,
            TokenStatus::Missing => Some(ErrorKind::Missing),
            TokenStatus::Extra => Some(ErrorKind::Extra),
            TokenStatus::NearMiss | TokenStatus::Error => Some(ErrorKind::Substitution),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Missing => write!(f, "missing"),
            ErrorKind::Extra => write!(f, "extra"),
            ErrorKind::Substitution => write!(f, "substitution"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence < 0.3 {
            Severity::High
        } else if confidence < 0.6 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}
