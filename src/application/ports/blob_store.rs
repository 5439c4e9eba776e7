use std::io;

use bytes::Bytes;

use crate::domain::StoragePath;

/// Object-storage upload for raw uploaded bytes. `put` returns the public
/// content URL when the backing store exposes one.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(
        &self,
        path: &StoragePath,
        data: Bytes,
        content_type: &str,
    ) -> Result<Option<String>, BlobStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
