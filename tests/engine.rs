use recite::{compare_texts, ComparisonResult, ErrorKind, Language, TokenStatus};

fn assert_consistent(result: &ComparisonResult) {
    assert!((0.0..=1.0).contains(&result.accuracy));

    let with_reference = result
        .aligned_tokens
        .iter()
        .filter(|t| !t.reference.is_empty())
        .count();
    assert_eq!(with_reference, result.statistics.total_words);

    let not_correct = result
        .aligned_tokens
        .iter()
        .filter(|t| !t.reference.is_empty() && t.status != TokenStatus::Correct)
        .count();
    assert_eq!(result.statistics.correct_words + not_correct, result.statistics.total_words);

    let positions: Vec<usize> = result.aligned_tokens.iter().filter_map(|t| t.position).collect();
    assert_eq!(positions, (0..result.statistics.total_words).collect::<Vec<_>>());

    for token in &result.aligned_tokens {
        assert!((0.0..=1.0).contains(&token.confidence));
        match token.status {
            TokenStatus::Correct => assert_eq!(token.confidence, 1.0),
            TokenStatus::Missing => {
                assert!(token.recognized.is_empty());
                assert_eq!(token.confidence, 0.0);
            }
            TokenStatus::Extra => {
                assert!(token.reference.is_empty());
                assert_eq!(token.position, None);
                assert_eq!(token.confidence, 0.0);
            }
            TokenStatus::NearMiss => assert!(token.confidence > 0.5 && token.confidence <= 0.7),
            TokenStatus::Error => assert!(token.confidence <= 0.5),
        }
    }
}

#[test]
fn test_identical_texts() {
    let result = compare_texts(
        "Hello world this is a test",
        "Hello world this is a test",
        Language::Latin,
    );

    assert_eq!(result.accuracy, 1.0);
    assert!(result.errors.is_empty());
    assert_eq!(result.statistics.correct_words, 6);
    assert_consistent(&result);
}

#[test]
fn test_empty_recognized_text() {
    let result = compare_texts("Hello world", "", Language::Latin);

    assert_eq!(result.accuracy, 0.0);
    assert_eq!(result.errors.len(), 2);
    assert!(result.errors.iter().all(|e| e.kind == ErrorKind::Missing));
    assert!(result.aligned_tokens.iter().all(|t| t.status == TokenStatus::Missing));
    assert_consistent(&result);
}

#[test]
fn test_missing_word() {
    let result = compare_texts(
        "Hello world this is a test",
        "Hello world this is test",
        Language::Latin,
    );

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::Missing);
    assert_eq!(result.errors[0].expected, "a");
    assert_eq!(result.errors[0].position, Some(4));
    assert_eq!(result.statistics.correct_words, 5);
    assert_consistent(&result);
}

#[test]
fn test_extra_words() {
    let result = compare_texts("Hello world test", "Hello world this is a test", Language::Latin);

    assert!(result.accuracy == 1.0);
    assert_eq!(result.errors.len(), 3);
    assert!(result.errors.iter().all(|e| e.kind == ErrorKind::Extra));
    assert_eq!(result.statistics.total_words, 3);
    assert_consistent(&result);
}

#[test]
fn test_near_miss() {
    let result = compare_texts("testing", "test", Language::Latin);

    assert_eq!(result.aligned_tokens[0].status, TokenStatus::NearMiss);
    assert!((result.aligned_tokens[0].confidence - 0.571).abs() < 1e-3);
    assert_eq!(result.statistics.near_miss_count, 1);
    assert_eq!(result.statistics.error_count, 0);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::Substitution);
    assert_consistent(&result);
}

#[test]
fn test_case_and_punctuation_are_ignored() {
    assert_eq!(compare_texts("Hello World", "hello world", Language::Latin).accuracy, 1.0);
    assert_eq!(compare_texts("Hello, world!", "Hello world", Language::Latin).accuracy, 1.0);
    assert_eq!(compare_texts("Merhaba, Dünya!", "merhaba dünya", Language::Turkish).accuracy, 1.0);
}

#[test]
fn test_special_characters_differ() {
    let result = compare_texts("test@example.com", "test at example dot com", Language::Latin);

    assert!(result.accuracy < 1.0);
    assert_consistent(&result);
}

#[test]
fn test_arabic_identical() {
    let result = compare_texts("مرحبا بالعالم", "مرحبا بالعالم", Language::Arabic);

    assert_eq!(result.accuracy, 1.0);
    assert_eq!(result.statistics.correct_words, 2);
}

#[test]
fn test_arabic_diacritics_are_normalized() {
    let result = compare_texts("الحمد لله رب العالمين", "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ", Language::Arabic);

    assert!(result.accuracy > 0.8);
    assert_consistent(&result);
}

#[test]
fn test_unknown_language_uses_latin_rules() {
    let fallback = compare_texts("Hello, World", "hello world", Language::from_tag("esperanto"));
    let latin = compare_texts("Hello, World", "hello world", Language::Latin);

    assert_eq!(fallback, latin);
    assert_eq!(fallback.accuracy, 1.0);
}

#[test]
fn test_long_text() {
    let text = "word ".repeat(1000);
    let result = compare_texts(text.trim(), text.trim(), Language::Latin);

    assert_eq!(result.accuracy, 1.0);
    assert_eq!(result.statistics.total_words, 1000);
}

#[test]
fn test_deterministic() {
    let reference = "the quick brown fox jumps over the lazy dog";
    let recognized = "a quick brown box jumped over lazy dogs today";

    let first = compare_texts(reference, recognized, Language::Latin);
    let second = compare_texts(reference, recognized, Language::Latin);

    assert_eq!(first, second);
    assert_consistent(&first);
}

#[test]
fn test_alignment_is_total() {
    let cases = [
        ("", "", Language::Latin),
        ("one", "", Language::Latin),
        ("", "one two", Language::Latin),
        ("a b c d e", "e d c b a", Language::Latin),
        ("to be or not to be", "to bee or knot two be that is", Language::Latin),
        ("بسم الله الرحمن الرحيم", "بسم الله الرحيم", Language::Arabic),
    ];

    for (reference, recognized, language) in cases {
        let result = compare_texts(reference, recognized, language);
        assert_consistent(&result);

        let refs: Vec<String> = result
            .aligned_tokens
            .iter()
            .filter(|t| !t.reference.is_empty())
            .map(|t| t.reference.clone())
            .collect();
        let recs: Vec<String> = result
            .aligned_tokens
            .iter()
            .filter(|t| !t.recognized.is_empty())
            .map(|t| t.recognized.clone())
            .collect();
        assert_eq!(refs, recite::engine::tokenizer::tokenize(reference, language));
        assert_eq!(recs, recite::engine::tokenizer::tokenize(recognized, language));
    }
}
