use bytes::Bytes;
use filesense::application::ports::{BlobStore, BlobStoreError};
use filesense::domain::StoragePath;
use filesense::infrastructure::storage::LocalBlobStore;

#[tokio::test]
async fn given_no_public_base_url_when_putting_then_no_content_url_is_returned() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = LocalBlobStore::new(dir.path().to_path_buf(), None).expect("store init");
    let path = StoragePath::new(1, "a.txt");

    let url = store
        .put(&path, Bytes::from_static(b"hello"), "text/plain")
        .await
        .expect("put succeeds");

    assert_eq!(url, None);
}

#[tokio::test]
async fn given_public_base_url_when_putting_then_content_url_is_derived_from_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = LocalBlobStore::new(
        dir.path().to_path_buf(),
        Some("http://localhost:9000/files/".to_string()),
    )
    .expect("store init");
    let path = StoragePath::new(2, "b.txt");

    let url = store
        .put(&path, Bytes::from_static(b"hello"), "text/plain")
        .await
        .expect("put succeeds");

    assert_eq!(url.as_deref(), Some("http://localhost:9000/files/2_b.txt"));
}

#[tokio::test]
async fn given_stored_object_when_fetching_then_bytes_come_back() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = LocalBlobStore::new(dir.path().to_path_buf(), None).expect("store init");
    let path = StoragePath::new(3, "c.bin");

    store
        .put(&path, Bytes::from_static(&[1, 2, 3]), "application/octet-stream")
        .await
        .expect("put succeeds");

    let bytes = store.fetch(&path).await.expect("fetch succeeds");
    assert_eq!(bytes, vec![1, 2, 3]);
}

#[tokio::test]
async fn given_missing_object_when_fetching_then_returns_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = LocalBlobStore::new(dir.path().to_path_buf(), None).expect("store init");
    let path = StoragePath::new(4, "missing.bin");

    let result = store.fetch(&path).await;

    assert!(matches!(result, Err(BlobStoreError::NotFound(_))));
}
