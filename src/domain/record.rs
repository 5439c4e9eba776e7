use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::analysis::{AnalysisSource, Sentiment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of persisting an analysis: the record identifier and, when the
/// raw bytes were uploaded to object storage, a retrievable content URL.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub id: RecordId,
    pub content_url: Option<String>,
}

/// A persisted analysis row as read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRecord {
    pub id: RecordId,
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub title: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
    pub complexity: f64,
    pub word_count: i64,
    pub page_count: i64,
    pub resolution: Option<String>,
    pub source: AnalysisSource,
    pub content_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
