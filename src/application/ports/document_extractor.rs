use async_trait::async_trait;

/// Document-text-extraction capability for Word-format uploads.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, data: &[u8]) -> Result<String, DocumentExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentExtractorError {
    #[error("invalid container: {0}")]
    InvalidContainer(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in document")]
    NoTextFound,
}
