use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::StoragePath;

#[derive(Default)]
pub struct MockBlobStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    fail_uploads: bool,
}

impl MockBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            fail_uploads: true,
        }
    }
}

#[async_trait::async_trait]
impl BlobStore for MockBlobStore {
    async fn put(
        &self,
        path: &StoragePath,
        data: Bytes,
        _content_type: &str,
    ) -> Result<Option<String>, BlobStoreError> {
        if self.fail_uploads {
            return Err(BlobStoreError::UploadFailed("mock upload failure".into()));
        }

        self.objects
            .lock()
            .expect("mock blob store lock")
            .insert(path.as_str().to_string(), data.to_vec());

        Ok(Some(format!("mock://{}", path.as_str())))
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, BlobStoreError> {
        self.objects
            .lock()
            .expect("mock blob store lock")
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| BlobStoreError::NotFound(path.as_str().to_string()))
    }
}
