use std::sync::Arc;

use crate::application::ports::{
    AnalysisRequest, ContentPart, DocumentExtractor, ImageProbe, RemoteAnalyzer,
};
use crate::domain::{
    AnalysisMetadata, AnalysisResult, AnalysisSource, ContentType, Dimensions, Sentiment, Upload,
};

use super::keywords::top_keywords;
use super::readability;
use super::text_stats::word_count;

const FALLBACK_SUMMARY_PREFIX: &str = "AI Analysis unavailable. Basic analysis: ";
const NO_TEXT_SUMMARY: &str = "Analysis failed and no text could be extracted.";
const PIPELINE_FAILURE_SUMMARY: &str = "Critical failure in analysis pipeline.";
const FALLBACK_PREVIEW_CHARS: usize = 100;
const MAX_KEYWORDS: usize = 5;

/// The file-analysis pipeline: format routing, best-effort local
/// extraction, one remote analysis attempt, heuristic fallback. `analyze`
/// always returns a well-formed result and never errors to the caller.
pub struct AnalysisService<A>
where
    A: RemoteAnalyzer,
{
    document_extractor: Arc<dyn DocumentExtractor>,
    image_probe: Arc<dyn ImageProbe>,
    remote_analyzer: Arc<A>,
}

impl<A> AnalysisService<A>
where
    A: RemoteAnalyzer,
{
    pub fn new(
        document_extractor: Arc<dyn DocumentExtractor>,
        image_probe: Arc<dyn ImageProbe>,
        remote_analyzer: Arc<A>,
    ) -> Self {
        Self {
            document_extractor,
            image_probe,
            remote_analyzer,
        }
    }

    #[tracing::instrument(skip(self, data), fields(filename = %filename, mime_type = %mime_type))]
    pub async fn analyze(&self, data: &[u8], mime_type: &str, filename: &str) -> AnalysisResult {
        let upload = Upload::new(filename.to_string(), mime_type.to_string(), data.len() as u64);

        let mut metadata = AnalysisMetadata::default();
        let mut text: Option<String> = None;
        let mut parts: Vec<ContentPart> = Vec::new();

        match upload.content_type {
            ContentType::Pdf => {
                metadata.format = Some("pdf".to_string());
                parts.push(ContentPart::Inline {
                    mime_type: upload.mime_type.clone(),
                    data: data.to_vec(),
                });
            }
            ContentType::Word => match self.document_extractor.extract(data).await {
                Ok(extracted) => {
                    metadata.word_count = Some(word_count(&extracted) as u64);
                    parts.push(ContentPart::Text(extracted.clone()));
                    text = Some(extracted);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Document extraction failed");
                    return Self::pipeline_failure(metadata);
                }
            },
            ContentType::Image => {
                match self.image_probe.probe(data).await {
                    Ok(info) => {
                        metadata.resolution = Some(format!("{}x{}", info.width, info.height));
                        metadata.dimensions = Some(Dimensions {
                            width: info.width,
                            height: info.height,
                        });
                        metadata.format = Some(info.format);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Image introspection failed, falling back to declared subtype");
                        metadata.format = upload.mime_subtype().map(str::to_string);
                    }
                }
                parts.push(ContentPart::Inline {
                    mime_type: upload.mime_type.clone(),
                    data: data.to_vec(),
                });
            }
            ContentType::Text => {
                let decoded = String::from_utf8_lossy(data).into_owned();
                metadata.word_count = Some(word_count(&decoded) as u64);
                parts.push(ContentPart::Text(decoded.clone()));
                text = Some(decoded);
            }
        }

        let request = AnalysisRequest { parts };

        match self.remote_analyzer.analyze(&request).await {
            Ok(remote) => {
                // Local metadata always wins; model estimates only backfill.
                if metadata.word_count.is_none() {
                    metadata.word_count = remote.word_count;
                }
                if metadata.page_count.is_none() {
                    metadata.page_count = remote.page_count;
                }

                AnalysisResult {
                    text,
                    metadata,
                    summary: remote.summary,
                    keywords: remote.keywords,
                    sentiment: remote.sentiment,
                    complexity: Some(remote.complexity),
                    source: AnalysisSource::Remote,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Remote analysis failed, falling back to heuristics");
                Self::heuristic_fallback(text, metadata)
            }
        }
    }

    fn heuristic_fallback(text: Option<String>, metadata: AnalysisMetadata) -> AnalysisResult {
        match text {
            Some(t) if !t.is_empty() => {
                let complexity = readability::reading_ease(&t);
                let preview: String = t.chars().take(FALLBACK_PREVIEW_CHARS).collect();

                AnalysisResult {
                    summary: format!("{FALLBACK_SUMMARY_PREFIX}{preview}..."),
                    keywords: top_keywords(&t, MAX_KEYWORDS),
                    sentiment: Sentiment::Neutral,
                    complexity: Some(complexity),
                    text: Some(t),
                    metadata,
                    source: AnalysisSource::Heuristic,
                }
            }
            other => AnalysisResult {
                text: other,
                metadata,
                summary: NO_TEXT_SUMMARY.to_string(),
                keywords: Vec::new(),
                sentiment: Sentiment::Neutral,
                complexity: None,
                source: AnalysisSource::Failed,
            },
        }
    }

    fn pipeline_failure(metadata: AnalysisMetadata) -> AnalysisResult {
        AnalysisResult {
            text: None,
            metadata,
            summary: PIPELINE_FAILURE_SUMMARY.to_string(),
            keywords: Vec::new(),
            sentiment: Sentiment::Neutral,
            complexity: None,
            source: AnalysisSource::Failed,
        }
    }
}

/// Fixed summary prefix used by the heuristic fallback, exposed so callers
/// and tests can match on it.
pub fn fallback_summary_prefix() -> &'static str {
    FALLBACK_SUMMARY_PREFIX
}
