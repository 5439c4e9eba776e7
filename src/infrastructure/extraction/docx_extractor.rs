use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::application::ports::{DocumentExtractor, DocumentExtractorError};

/// Extracts plain text from OOXML Word documents by reading the `<w:t>`
/// runs of `word/document.xml` inside the zip container. Legacy binary
/// `.doc` payloads fail the container check and surface as extraction
/// errors.
#[derive(Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_document_xml(data: &[u8]) -> Result<String, DocumentExtractorError> {
        let mut archive = ZipArchive::new(Cursor::new(data))
            .map_err(|e| DocumentExtractorError::InvalidContainer(e.to_string()))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                DocumentExtractorError::InvalidContainer(format!("missing word/document.xml: {e}"))
            })?
            .read_to_string(&mut xml)
            .map_err(|e| DocumentExtractorError::ExtractionFailed(e.to_string()))?;

        let text = Self::collect_text_runs(&xml)?;
        if text.trim().is_empty() {
            return Err(DocumentExtractorError::NoTextFound);
        }

        Ok(text)
    }

    fn collect_text_runs(xml: &str) -> Result<String, DocumentExtractorError> {
        let mut reader = Reader::from_str(xml);
        let mut out = String::new();
        let mut in_text_run = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"t" => in_text_run = false,
                    b"p" => {
                        if !out.is_empty() && !out.ends_with('\n') {
                            out.push('\n');
                        }
                    }
                    _ => {}
                },
                Ok(Event::Empty(e)) => {
                    // tabs and line breaks inside a run become whitespace
                    match e.local_name().as_ref() {
                        b"tab" => out.push(' '),
                        b"br" => out.push('\n'),
                        _ => {}
                    }
                }
                Ok(Event::Text(t)) if in_text_run => {
                    let decoded = t
                        .unescape()
                        .map_err(|e| DocumentExtractorError::ExtractionFailed(e.to_string()))?;
                    out.push_str(&decoded);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(DocumentExtractorError::ExtractionFailed(format!(
                        "malformed document xml: {e}"
                    )));
                }
            }
        }

        Ok(out.trim().to_string())
    }
}

#[async_trait]
impl DocumentExtractor for DocxExtractor {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(&self, data: &[u8]) -> Result<String, DocumentExtractorError> {
        let owned = data.to_vec();

        let text = tokio::task::spawn_blocking(move || Self::extract_document_xml(&owned))
            .await
            .map_err(|e| {
                DocumentExtractorError::ExtractionFailed(format!("task join error: {e}"))
            })??;

        tracing::debug!(chars = text.len(), "Word document text extraction complete");
        Ok(text)
    }
}
