use std::sync::LazyLock;

use regex::Regex;

static SILENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());
static LEADING_Y: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^y").unwrap());
static VOWEL_GROUPS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Per-word syllable estimate: short words count as one syllable; longer
/// words drop a trailing silent-e/-ed/-es pattern and a leading `y`, then
/// count runs of one or two vowels.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let stripped = SILENT_SUFFIX.replace(&word, "");
    let stripped = LEADING_Y.replace(&stripped, "");

    let groups = VOWEL_GROUPS.find_iter(&stripped).count();
    groups.max(1)
}

/// Flesch-Kincaid reading ease, rounded to two decimals. The formula is
/// unbounded and intentionally not clamped to 0-100.
///
/// Sentence segments only need to be non-empty; a whitespace-only tail
/// after the final terminator still counts as a sentence.
pub fn reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = SENTENCE_BOUNDARY
        .split(text)
        .filter(|s| !s.is_empty())
        .count()
        .max(1);
    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    let score = 206.835
        - 1.015 * (words.len() as f64 / sentence_count as f64)
        - 84.6 * (syllable_count as f64 / words.len().max(1) as f64);

    (score * 100.0).round() / 100.0
}
