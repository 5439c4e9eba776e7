use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use tracing::instrument;

use crate::application::ports::{AnalysisStore, AnalysisStoreError, BlobStore, RecordStore};
use crate::domain::{AnalysisRecord, AnalysisResult, RecordId, StoragePath, StoredRecord, Upload};

/// Object-storage persistence variant: raw bytes go to a blob store and the
/// metadata row carries the returned content URL. A failed upload degrades
/// to a metadata-only record instead of failing the request.
pub struct BlobAnalysisStore {
    blob_store: Arc<dyn BlobStore>,
    records: Arc<dyn RecordStore>,
}

impl BlobAnalysisStore {
    pub fn new(blob_store: Arc<dyn BlobStore>, records: Arc<dyn RecordStore>) -> Self {
        Self {
            blob_store,
            records,
        }
    }
}

#[async_trait]
impl AnalysisStore for BlobAnalysisStore {
    #[instrument(skip(self, data, result), fields(filename = %upload.filename))]
    async fn persist(
        &self,
        upload: &Upload,
        data: &[u8],
        result: &AnalysisResult,
    ) -> Result<StoredRecord, AnalysisStoreError> {
        let path = StoragePath::new(Utc::now().timestamp_millis(), &upload.filename);

        let content_url = match self
            .blob_store
            .put(&path, Bytes::copy_from_slice(data), &upload.mime_type)
            .await
        {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, path = %path, "Blob upload failed, storing metadata only");
                None
            }
        };

        self.records
            .insert_record(upload, result, content_url.as_deref())
            .await
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Option<AnalysisRecord>, AnalysisStoreError> {
        self.records.fetch_record(id).await
    }
}
