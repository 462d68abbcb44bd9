use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    // The Latin family also clears Arabic comma, semicolon and question mark.
    static ref LATIN_PUNCTUATION: Regex = Regex::new(r"[.،؛:!؟,;?]").unwrap();
    static ref ARABIC_PUNCTUATION: Regex = Regex::new(r"[.،؛:!؟]").unwrap();
}

/// Language tag selecting tokenizer and normalization rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Latin,
    /// Shares the Latin path. No dotted/dotless I folding is applied.
    Turkish,
    Arabic,
}

impl Language {
    /// Resolve a tag. Unrecognized tags fall back to `Latin`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "latin" => Language::Latin,
            "turkish" => Language::Turkish,
            "arabic" => Language::Arabic,
            other => {
                log::warn!("unknown language tag '{}', using latin rules", other);
                Language::Latin
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Latin => "latin",
            Language::Turkish => "turkish",
            Language::Arabic => "arabic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split `text` into normalized word tokens.
///
/// Arabic words are normalized after splitting, and a word that normalizes
/// to nothing (diacritics only) is dropped rather than kept as an empty token.
pub fn tokenize(text: &str, language: Language) -> Vec<String> {
    match language {
        Language::Latin | Language::Turkish => LATIN_PUNCTUATION
            .replace_all(text.trim(), " ")
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .collect(),
        Language::Arabic => ARABIC_PUNCTUATION
            .replace_all(text.trim(), " ")
            .split_whitespace()
            .map(normalize_arabic)
            .filter(|word| !word.is_empty())
            .collect(),
    }
}

/// Fold an Arabic word to the form used for comparison.
pub fn normalize_arabic(word: &str) -> String {
    word.chars()
        .filter(|&ch| !is_arabic_diacritic(ch))
        .map(fold_arabic_letter)
        .collect()
}

// Tanwin forms, fatha, damma, kasra, shadda, sukun.
fn is_arabic_diacritic(ch: char) -> bool {
    ('\u{064B}'..='\u{0652}').contains(&ch)
}

fn fold_arabic_letter(ch: char) -> char {
    match ch {
        // Alef with hamza above, hamza below, madda
        '\u{0623}' | '\u{0625}' | '\u{0622}' => '\u{0627}',
        // Waw with hamza
        '\u{0624}' => '\u{0648}',
        // Yaa with hamza
        '\u{0626}' => '\u{064A}',
        // Taa marbuta
        '\u{0629}' => '\u{0647}',
        other => other,
    }
}
