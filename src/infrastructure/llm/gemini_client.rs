use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    AnalysisRequest, ContentPart, RemoteAnalysis, RemoteAnalyzer, RemoteAnalyzerError,
};

use super::payload::parse_analysis_payload;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const ANALYSIS_PROMPT: &str = "Analyze this file. Return a JSON object with the following fields:\n\
- summary: A concise summary of the content (string).\n\
- keywords: Top 5 relevant keywords (array of strings).\n\
- sentiment: The overall sentiment (Positive, Negative, Neutral) (string).\n\
- complexity: A readability score from 0-100 (number).\n\
- wordCount: Estimated word count if derivable (number, optional).\n\
- pageCount: Page count if derivable (number, optional).\n\
\n\
Output ONLY valid JSON.";

/// Gemini `generateContent` client. One attempt per analysis, no retry; the
/// caller owns the fallback.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl Part {
    fn text(value: impl Into<String>) -> Self {
        Self {
            text: Some(value.into()),
            inline_data: None,
        }
    }

    fn from_content(part: &ContentPart) -> Self {
        match part {
            ContentPart::Text(text) => Self::text(text.clone()),
            ContentPart::Inline { mime_type, data } => Self {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: mime_type.clone(),
                    data: general_purpose::STANDARD.encode(data),
                }),
            },
        }
    }
}

#[async_trait]
impl RemoteAnalyzer for GeminiClient {
    #[tracing::instrument(skip(self, request), fields(model = %self.model))]
    async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<RemoteAnalysis, RemoteAnalyzerError> {
        let mut parts: Vec<Part> = request.parts.iter().map(Part::from_content).collect();
        parts.push(Part::text(ANALYSIS_PROMPT));

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts,
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteAnalyzerError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteAnalyzerError::RequestFailed(format!(
                "HTTP {status}: {body}"
            )));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| RemoteAnalyzerError::InvalidResponse(e.to_string()))?;

        let text: String = completion
            .candidates
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| c.content)
            .filter_map(|c| c.parts)
            .flatten()
            .filter_map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            return Err(RemoteAnalyzerError::EmptyResponse);
        }

        parse_analysis_payload(&text)
    }
}
