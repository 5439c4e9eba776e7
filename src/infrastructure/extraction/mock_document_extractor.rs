use crate::application::ports::{DocumentExtractor, DocumentExtractorError};

pub struct MockDocumentExtractor {
    text: Option<String>,
}

impl MockDocumentExtractor {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn failing() -> Self {
        Self { text: None }
    }
}

#[async_trait::async_trait]
impl DocumentExtractor for MockDocumentExtractor {
    async fn extract(&self, _data: &[u8]) -> Result<String, DocumentExtractorError> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => Err(DocumentExtractorError::ExtractionFailed(
                "mock extraction failure".to_string(),
            )),
        }
    }
}
