use async_trait::async_trait;

use crate::domain::{AnalysisRecord, AnalysisResult, RecordId, StoredRecord, Upload};

/// Persistence collaborator for completed analyses. Two interchangeable
/// variants exist (relational row only, or object-storage upload plus a
/// metadata row); the pipeline does not depend on which is configured.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn persist(
        &self,
        upload: &Upload,
        data: &[u8],
        result: &AnalysisResult,
    ) -> Result<StoredRecord, AnalysisStoreError>;

    async fn get_by_id(&self, id: RecordId) -> Result<Option<AnalysisRecord>, AnalysisStoreError>;
}

/// Metadata-row persistence behind the object-storage variant: inserts the
/// analysis record with whatever content URL the blob upload produced, and
/// reads records back.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert_record(
        &self,
        upload: &Upload,
        result: &AnalysisResult,
        content_url: Option<&str>,
    ) -> Result<StoredRecord, AnalysisStoreError>;

    async fn fetch_record(
        &self,
        id: RecordId,
    ) -> Result<Option<AnalysisRecord>, AnalysisStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisStoreError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("serialization failed: {0}")]
    SerializationFailed(String),
}
