use filesense::application::ports::RemoteAnalyzerError;
use filesense::domain::Sentiment;
use filesense::infrastructure::llm::{parse_analysis_payload, strip_code_fences};

#[test]
fn given_fenced_json_when_stripping_then_fence_and_info_string_are_removed() {
    let raw = "```json\n{\"summary\":\"ok\"}\n```";
    assert_eq!(strip_code_fences(raw), "{\"summary\":\"ok\"}");
}

#[test]
fn given_fence_without_info_string_when_stripping_then_content_survives() {
    let raw = "```\n{\"a\":1}\n```";
    assert_eq!(strip_code_fences(raw), "{\"a\":1}");
}

#[test]
fn given_plain_json_when_stripping_then_only_whitespace_is_trimmed() {
    assert_eq!(strip_code_fences("  {\"a\":1}\n"), "{\"a\":1}");
}

#[test]
fn given_complete_payload_when_parsing_then_all_fields_populate() {
    let raw = r#"{"summary":"A memo.","keywords":["memo","staff","notice"],"sentiment":"Negative","complexity":55.5,"wordCount":120,"pageCount":2}"#;

    let analysis = parse_analysis_payload(raw).expect("payload parses");

    assert_eq!(analysis.summary, "A memo.");
    assert_eq!(analysis.keywords, vec!["memo", "staff", "notice"]);
    assert_eq!(analysis.sentiment, Sentiment::Negative);
    assert_eq!(analysis.complexity, 55.5);
    assert_eq!(analysis.word_count, Some(120));
    assert_eq!(analysis.page_count, Some(2));
}

#[test]
fn given_fenced_payload_when_parsing_then_normalization_happens_first() {
    let raw = "```json\n{\"summary\":\"s\",\"keywords\":[],\"sentiment\":\"Neutral\",\"complexity\":10}\n```";

    let analysis = parse_analysis_payload(raw).expect("payload parses");

    assert_eq!(analysis.summary, "s");
    assert_eq!(analysis.word_count, None);
}

#[test]
fn given_excess_keywords_when_parsing_then_list_is_truncated_to_five() {
    let raw = r#"{"summary":"s","keywords":["a1","a2","a3","a4","a5","a6","a7"],"sentiment":"Positive","complexity":1}"#;

    let analysis = parse_analysis_payload(raw).expect("payload parses");

    assert_eq!(analysis.keywords.len(), 5);
    assert_eq!(analysis.keywords[0], "a1");
}

#[test]
fn given_unknown_sentiment_label_when_parsing_then_defaults_to_neutral() {
    let raw = r#"{"summary":"s","keywords":[],"sentiment":"Ecstatic","complexity":1}"#;

    let analysis = parse_analysis_payload(raw).expect("payload parses");

    assert_eq!(analysis.sentiment, Sentiment::Neutral);
}

#[test]
fn given_missing_required_field_when_parsing_then_returns_invalid_response() {
    let raw = r#"{"keywords":[],"sentiment":"Neutral","complexity":1}"#;

    let result = parse_analysis_payload(raw);

    assert!(matches!(
        result,
        Err(RemoteAnalyzerError::InvalidResponse(_))
    ));
}

#[test]
fn given_non_json_body_when_parsing_then_returns_invalid_response() {
    let result = parse_analysis_payload("I could not analyze this file, sorry.");

    assert!(matches!(
        result,
        Err(RemoteAnalyzerError::InvalidResponse(_))
    ));
}
