mod docx_extractor;
mod image_meta_probe;
mod mock_document_extractor;
mod mock_image_probe;

pub use docx_extractor::DocxExtractor;
pub use image_meta_probe::ImageMetaProbe;
pub use mock_document_extractor::MockDocumentExtractor;
pub use mock_image_probe::MockImageProbe;
