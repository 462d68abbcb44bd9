use super::classify::{ErrorKind, Severity, TokenStatus};
use crate::{AlignedToken, Statistics, TextError};

pub fn statistics(rows: &[AlignedToken]) -> Statistics {
    let mut stats = Statistics::default();

    for row in rows {
        if !row.reference.is_empty() {
            stats.total_words += 1;
        }
        match row.status {
            TokenStatus::Correct => stats.correct_words += 1,
            TokenStatus::Error => stats.error_count += 1,
            TokenStatus::NearMiss => stats.near_miss_count += 1,
            TokenStatus::Missing | TokenStatus::Extra => {}
        }
    }

    stats
}

/// Share of reference words recited correctly; 0 when there are none.
pub fn accuracy(stats: &Statistics) -> f64 {
    if stats.total_words == 0 {
        return 0.0;
    }
    stats.correct_words as f64 / stats.total_words as f64
}

/// Error records for every non-correct row, in alignment order.
pub fn extract_errors(rows: &[AlignedToken]) -> Vec<TextError> {
    rows.iter()
        .filter_map(|row| {
            ErrorKind::from_status(row.status).map(|kind| TextError {
                kind,
                expected: row.reference.clone(),
                actual: row.recognized.clone(),
                position: row.position,
                severity: Severity::from_confidence(row.confidence),
            })
        })
        .collect()
}
