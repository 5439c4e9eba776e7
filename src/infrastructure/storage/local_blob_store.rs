use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::StoragePath;

/// Filesystem-backed blob store. A public base URL, when configured, is
/// prepended to the storage path to form the content URL.
pub struct LocalBlobStore {
    inner: Arc<LocalFileSystem>,
    public_base_url: Option<String>,
}

impl LocalBlobStore {
    pub fn new(
        base_path: PathBuf,
        public_base_url: Option<String>,
    ) -> Result<Self, BlobStoreError> {
        std::fs::create_dir_all(&base_path).map_err(BlobStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            public_base_url: public_base_url.map(|u| u.trim_end_matches('/').to_string()),
        })
    }
}

#[async_trait::async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(
        &self,
        path: &StoragePath,
        data: Bytes,
        _content_type: &str,
    ) -> Result<Option<String>, BlobStoreError> {
        let store_path = StorePath::from(path.as_str());

        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        Ok(self
            .public_base_url
            .as_ref()
            .map(|base| format!("{}/{}", base, path.as_str())))
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, BlobStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| BlobStoreError::NotFound(e.to_string()))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
