mod analysis_store;
mod blob_store;
mod document_extractor;
mod image_probe;
mod remote_analyzer;

pub use analysis_store::{AnalysisStore, AnalysisStoreError, RecordStore};
pub use blob_store::{BlobStore, BlobStoreError};
pub use document_extractor::{DocumentExtractor, DocumentExtractorError};
pub use image_probe::{ImageInfo, ImageProbe, ImageProbeError};
pub use remote_analyzer::{
    AnalysisRequest, ContentPart, RemoteAnalysis, RemoteAnalyzer, RemoteAnalyzerError,
};
