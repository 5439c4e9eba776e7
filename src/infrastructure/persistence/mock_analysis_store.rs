use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{AnalysisStore, AnalysisStoreError};
use crate::domain::{AnalysisRecord, AnalysisResult, RecordId, StoredRecord, Upload};

#[derive(Default)]
pub struct MockAnalysisStore {
    persisted: Mutex<Vec<(Upload, AnalysisResult)>>,
}

impl MockAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persisted(&self) -> Vec<(Upload, AnalysisResult)> {
        self.persisted.lock().expect("mock store lock").clone()
    }
}

#[async_trait]
impl AnalysisStore for MockAnalysisStore {
    async fn persist(
        &self,
        upload: &Upload,
        _data: &[u8],
        result: &AnalysisResult,
    ) -> Result<StoredRecord, AnalysisStoreError> {
        self.persisted
            .lock()
            .expect("mock store lock")
            .push((upload.clone(), result.clone()));

        Ok(StoredRecord {
            id: RecordId::new(),
            content_url: None,
        })
    }

    async fn get_by_id(&self, _id: RecordId) -> Result<Option<AnalysisRecord>, AnalysisStoreError> {
        Ok(None)
    }
}
