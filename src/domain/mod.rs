mod analysis;
mod record;
mod storage_path;
mod upload;

pub use analysis::{AnalysisMetadata, AnalysisResult, AnalysisSource, Dimensions, Sentiment};
pub use record::{AnalysisRecord, RecordId, StoredRecord};
pub use storage_path::StoragePath;
pub use upload::{ContentType, Upload};
