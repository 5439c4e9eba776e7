use filesense::application::services::keywords::top_keywords;

#[test]
fn given_repeated_words_when_extracting_then_ranked_by_descending_frequency() {
    let text = "rust rust rust tokio tokio serde";
    assert_eq!(top_keywords(text, 5), vec!["rust", "tokio", "serde"]);
}

#[test]
fn given_short_tokens_when_extracting_then_length_three_and_below_are_dropped() {
    let text = "cats sleep a lot and run fast";
    let keywords = top_keywords(text, 5);
    assert_eq!(keywords, vec!["cats", "sleep", "fast"]);
    assert!(!keywords.contains(&"lot".to_string()));
    assert!(!keywords.contains(&"run".to_string()));
}

#[test]
fn given_tied_frequencies_when_extracting_then_first_encounter_order_wins() {
    let text = "delta alpha gamma delta alpha gamma";
    assert_eq!(top_keywords(text, 5), vec!["delta", "alpha", "gamma"]);
}

#[test]
fn given_more_than_limit_when_extracting_then_result_is_capped() {
    let text = "first second third fourth fifth sixth seventh";
    assert_eq!(top_keywords(text, 5).len(), 5);
}

#[test]
fn given_punctuation_and_case_when_extracting_then_tokens_are_normalized() {
    let text = "Tokio! tokio? TOKIO.";
    assert_eq!(top_keywords(text, 5), vec!["tokio"]);
}

#[test]
fn given_empty_text_when_extracting_then_returns_nothing() {
    assert!(top_keywords("", 5).is_empty());
}
