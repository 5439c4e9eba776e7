mod local_blob_store;
mod mock_blob_store;

pub use local_blob_store::LocalBlobStore;
pub use mock_blob_store::MockBlobStore;
