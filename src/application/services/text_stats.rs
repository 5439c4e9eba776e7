/// Normative word count: split on runs of whitespace, discard empty tokens.
/// Local extraction and the heuristic fallback must agree on this.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
