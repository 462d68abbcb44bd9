pub mod output;

use crate::input::SourceText;
use crate::{compare_texts, ComparisonResult, Language};
use rayon::prelude::*;

/// One recognized text scored against the reference.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub source: String,
    pub result: ComparisonResult,
}

/// Score every recognized text against `reference`, keeping input order.
pub fn score_attempts(reference: &str, recognized: &[SourceText], language: Language) -> Vec<Attempt> {
    recognized
        .par_iter()
        .map(|input| Attempt {
            source: input.source.clone(),
            result: compare_texts(reference, &input.text, language),
        })
        .collect()
}

/// Attempts whose accuracy is under `min_accuracy`.
pub fn failing_attempts(attempts: &[Attempt], min_accuracy: f64) -> usize {
    attempts
        .iter()
        .filter(|attempt| attempt.result.accuracy < min_accuracy)
        .count()
}
