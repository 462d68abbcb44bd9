//! Presentation helpers shared by the text and JSON outputs.

use crate::{AlignedToken, ComparisonResult, TokenStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccuracyBand {
    /// 90% and above
    Mastered,
    /// 70% and above
    Practicing,
    NeedsWork,
}

impl AccuracyBand {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy >= 0.9 {
            AccuracyBand::Mastered
        } else if accuracy >= 0.7 {
            AccuracyBand::Practicing
        } else {
            AccuracyBand::NeedsWork
        }
    }
}

impl fmt::Display for AccuracyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccuracyBand::Mastered => write!(f, "mastered"),
            AccuracyBand::Practicing => write!(f, "practicing"),
            AccuracyBand::NeedsWork => write!(f, "needs work"),
        }
    }
}

/// Accuracy as a whole percentage.
pub fn percent(accuracy: f64) -> u32 {
    (accuracy * 100.0).round() as u32
}

/// Word shown for a row in the highlighted line.
pub fn display_text(token: &AlignedToken, show_reference: bool) -> &str {
    let (first, fallback) = if show_reference {
        (&token.reference, &token.recognized)
    } else {
        (&token.recognized, &token.reference)
    };

    if first.is_empty() {
        fallback
    } else {
        first
    }
}

/// One-line explanation of a row.
pub fn describe(token: &AlignedToken) -> String {
    match token.status {
        TokenStatus::Correct => format!("Correct: \"{}\"", token.reference),
        TokenStatus::Error => format!(
            "Expected: \"{}\" | Recognized: \"{}\"",
            token.reference, token.recognized
        ),
        TokenStatus::NearMiss => format!(
            "Close match ({}%): \"{}\" ≈ \"{}\"",
            percent(token.confidence),
            token.reference,
            token.recognized
        ),
        TokenStatus::Missing => format!("Missing word: \"{}\"", token.reference),
        TokenStatus::Extra => format!("Extra word: \"{}\"", token.recognized),
    }
}

/// Aggregate over several attempts at the same reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub total_sessions: usize,
    pub average_accuracy: f64,
    pub best_accuracy: f64,
}

impl SessionSummary {
    pub fn from_results(results: &[ComparisonResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let total: f64 = results.iter().map(|r| r.accuracy).sum();
        let best = results.iter().map(|r| r.accuracy).fold(0.0, f64::max);

        Self {
            total_sessions: results.len(),
            average_accuracy: total / results.len() as f64,
            best_accuracy: best,
        }
    }
}
