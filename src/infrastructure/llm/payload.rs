use serde::Deserialize;

use crate::application::ports::{RemoteAnalysis, RemoteAnalyzerError};
use crate::domain::Sentiment;

const MAX_KEYWORDS: usize = 5;

#[derive(Deserialize)]
struct AnalysisPayload {
    summary: String,
    keywords: Vec<String>,
    sentiment: String,
    complexity: f64,
    #[serde(rename = "wordCount")]
    word_count: Option<u64>,
    #[serde(rename = "pageCount")]
    page_count: Option<u64>,
}

/// Parses the model's response text into a structured analysis. Missing
/// required fields are an invalid response and route the caller to the
/// heuristic fallback.
pub fn parse_analysis_payload(raw: &str) -> Result<RemoteAnalysis, RemoteAnalyzerError> {
    let json = strip_code_fences(raw);

    let payload: AnalysisPayload = serde_json::from_str(json)
        .map_err(|e| RemoteAnalyzerError::InvalidResponse(e.to_string()))?;

    let mut keywords = payload.keywords;
    keywords.truncate(MAX_KEYWORDS);

    Ok(RemoteAnalysis {
        summary: payload.summary,
        keywords,
        sentiment: Sentiment::from_label(&payload.sentiment),
        complexity: payload.complexity,
        word_count: payload.word_count,
        page_count: payload.page_count,
    })
}

/// Some backends wrap JSON output in a markdown code fence even when asked
/// for a JSON MIME type. Normalization step before parsing, nothing more.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);

    // Drop the info string ("json") on the opening fence line.
    let rest = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => rest,
    };

    rest.trim()
}
