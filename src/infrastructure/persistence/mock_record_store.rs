use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{AnalysisStoreError, RecordStore};
use crate::domain::{AnalysisRecord, AnalysisResult, RecordId, StoredRecord, Upload};

#[derive(Default)]
pub struct MockRecordStore {
    inserted: Mutex<Vec<(Upload, Option<String>)>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads and content URLs captured by `insert_record`, in call order.
    pub fn inserted(&self) -> Vec<(Upload, Option<String>)> {
        self.inserted.lock().expect("mock record store lock").clone()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn insert_record(
        &self,
        upload: &Upload,
        _result: &AnalysisResult,
        content_url: Option<&str>,
    ) -> Result<StoredRecord, AnalysisStoreError> {
        self.inserted
            .lock()
            .expect("mock record store lock")
            .push((upload.clone(), content_url.map(String::from)));

        Ok(StoredRecord {
            id: RecordId::new(),
            content_url: content_url.map(String::from),
        })
    }

    async fn fetch_record(
        &self,
        _id: RecordId,
    ) -> Result<Option<AnalysisRecord>, AnalysisStoreError> {
        Ok(None)
    }
}
