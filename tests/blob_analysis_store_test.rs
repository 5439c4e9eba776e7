use std::sync::Arc;

use filesense::application::ports::{AnalysisStore, RecordStore};
use filesense::domain::{
    AnalysisMetadata, AnalysisResult, AnalysisSource, Sentiment, Upload,
};
use filesense::infrastructure::persistence::{BlobAnalysisStore, MockRecordStore};
use filesense::infrastructure::storage::MockBlobStore;

fn sample_upload() -> Upload {
    Upload::new("notes.txt".to_string(), "text/plain".to_string(), 17)
}

fn sample_result() -> AnalysisResult {
    AnalysisResult {
        text: Some("Cats sleep a lot.".to_string()),
        metadata: AnalysisMetadata::default(),
        summary: "A short note about cats.".to_string(),
        keywords: vec!["cats".to_string()],
        sentiment: Sentiment::Neutral,
        complexity: Some(70.0),
        source: AnalysisSource::Remote,
    }
}

#[tokio::test]
async fn given_working_blob_store_when_persisting_then_record_carries_content_url() {
    let records = Arc::new(MockRecordStore::new());
    let store = BlobAnalysisStore::new(
        Arc::new(MockBlobStore::new()),
        Arc::clone(&records) as Arc<dyn RecordStore>,
    );

    let stored = store
        .persist(&sample_upload(), b"Cats sleep a lot.", &sample_result())
        .await
        .expect("persist succeeds");

    let url = stored.content_url.expect("content url set");
    assert!(url.starts_with("mock://"));
    assert!(url.ends_with("_notes.txt"));

    let inserted = records.inserted();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].1.as_deref(), Some(url.as_str()));
}

#[tokio::test]
async fn given_failing_blob_store_when_persisting_then_metadata_only_record_is_stored() {
    let records = Arc::new(MockRecordStore::new());
    let store = BlobAnalysisStore::new(
        Arc::new(MockBlobStore::failing()),
        Arc::clone(&records) as Arc<dyn RecordStore>,
    );

    let stored = store
        .persist(&sample_upload(), b"Cats sleep a lot.", &sample_result())
        .await
        .expect("upload failure is absorbed");

    assert_eq!(stored.content_url, None);

    let inserted = records.inserted();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].0.filename, "notes.txt");
    assert_eq!(inserted[0].1, None);
}
