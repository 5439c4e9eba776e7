use async_trait::async_trait;

use crate::domain::Sentiment;

/// Hosted generative-AI completion endpoint. One attempt per request; any
/// failure mode is reported as an error and absorbed by the caller's
/// heuristic fallback.
#[async_trait]
pub trait RemoteAnalyzer: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest)
        -> Result<RemoteAnalysis, RemoteAnalyzerError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub parts: Vec<ContentPart>,
}

/// Content handed to the remote model: either locally extracted text or the
/// raw bytes inline with their declared MIME type.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentPart {
    Text(String),
    Inline { mime_type: String, data: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteAnalysis {
    pub summary: String,
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
    pub complexity: f64,
    pub word_count: Option<u64>,
    pub page_count: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteAnalyzerError {
    #[error("api request failed: {0}")]
    RequestFailed(String),
    #[error("empty response body")]
    EmptyResponse,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
