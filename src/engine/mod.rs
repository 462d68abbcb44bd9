pub mod alignment;
pub mod classify;
pub mod similarity;
pub mod stats;
pub mod tokenizer;

pub use classify::{ErrorKind, Severity, TokenStatus};

use crate::ComparisonResult;
use tokenizer::Language;

/// Score `recognized_text` against `reference_text`.
///
/// Total over its inputs: empty or punctuation-only texts produce an empty
/// alignment and an accuracy of 0.
pub fn compare_texts(reference_text: &str, recognized_text: &str, language: Language) -> ComparisonResult {
    let reference = tokenizer::tokenize(reference_text, language);
    let recognized = tokenizer::tokenize(recognized_text, language);

    log::debug!(
        "comparing {} reference tokens against {} recognized tokens ({})",
        reference.len(),
        recognized.len(),
        language
    );

    let aligned_tokens = alignment::align(&reference, &recognized);
    let statistics = stats::statistics(&aligned_tokens);
    let errors = stats::extract_errors(&aligned_tokens);

    ComparisonResult {
        accuracy: stats::accuracy(&statistics),
        aligned_tokens,
        errors,
        statistics,
    }
}
