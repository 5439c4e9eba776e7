use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{AnalysisStore, AnalysisStoreError, RecordStore};
use crate::domain::{
    AnalysisRecord, AnalysisResult, AnalysisSource, RecordId, Sentiment, StoredRecord, Upload,
};

const TITLE_CHARS: usize = 50;

/// Relational persistence variant: one row per analysis, raw bytes are not
/// retained.
pub struct PgAnalysisStore {
    pool: PgPool,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgAnalysisStore {
    async fn insert_record(
        &self,
        upload: &Upload,
        result: &AnalysisResult,
        content_url: Option<&str>,
    ) -> Result<StoredRecord, AnalysisStoreError> {
        let id = RecordId::new();

        let title = result
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| t.chars().take(TITLE_CHARS).collect::<String>())
            .unwrap_or_else(|| upload.filename.clone());

        let dimensions = match result.metadata.dimensions {
            Some(d) => serde_json::to_string(&d)
                .map_err(|e| AnalysisStoreError::SerializationFailed(e.to_string()))?,
            None => "{}".to_string(),
        };

        sqlx::query(
            r#"
            INSERT INTO analyses (
                id, filename, mime_type, size_bytes, title, summary, keywords,
                sentiment, complexity, word_count, page_count, resolution,
                dimensions, format, source, content_url, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&upload.filename)
        .bind(&upload.mime_type)
        .bind(upload.size_bytes as i64)
        .bind(title)
        .bind(&result.summary)
        .bind(result.keywords.join(", "))
        .bind(result.sentiment.as_str())
        .bind(result.complexity.unwrap_or(0.0))
        .bind(result.metadata.word_count.unwrap_or(0) as i64)
        .bind(result.metadata.page_count.unwrap_or(0) as i64)
        .bind(result.metadata.resolution.as_deref())
        .bind(dimensions)
        .bind(result.metadata.format.as_deref())
        .bind(result.source.as_str())
        .bind(content_url)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| AnalysisStoreError::QueryFailed(e.to_string()))?;

        Ok(StoredRecord {
            id,
            content_url: content_url.map(String::from),
        })
    }

    async fn fetch_record(
        &self,
        id: RecordId,
    ) -> Result<Option<AnalysisRecord>, AnalysisStoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, filename, mime_type, size_bytes, title, summary, keywords,
                   sentiment, complexity, word_count, page_count, resolution,
                   source, content_url, created_at
            FROM analyses
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AnalysisStoreError::QueryFailed(e.to_string()))?;

        match row {
            Some(row) => {
                let keywords_raw: String = row
                    .try_get("keywords")
                    .map_err(|e| AnalysisStoreError::QueryFailed(e.to_string()))?;
                let keywords: Vec<String> = keywords_raw
                    .split(", ")
                    .filter(|k| !k.is_empty())
                    .map(String::from)
                    .collect();

                let get_err = |e: sqlx::Error| AnalysisStoreError::QueryFailed(e.to_string());

                let sentiment: String = row.try_get("sentiment").map_err(get_err)?;
                let source: String = row.try_get("source").map_err(get_err)?;
                let record_uuid: Uuid = row.try_get("id").map_err(get_err)?;
                let created_at: DateTime<Utc> = row.try_get("created_at").map_err(get_err)?;

                Ok(Some(AnalysisRecord {
                    id: RecordId::from_uuid(record_uuid),
                    filename: row.try_get("filename").map_err(get_err)?,
                    mime_type: row.try_get("mime_type").map_err(get_err)?,
                    size_bytes: row.try_get("size_bytes").map_err(get_err)?,
                    title: row.try_get("title").map_err(get_err)?,
                    summary: row.try_get("summary").map_err(get_err)?,
                    keywords,
                    sentiment: Sentiment::from_label(&sentiment),
                    complexity: row.try_get("complexity").map_err(get_err)?,
                    word_count: row.try_get("word_count").map_err(get_err)?,
                    page_count: row.try_get("page_count").map_err(get_err)?,
                    resolution: row.try_get("resolution").map_err(get_err)?,
                    source: AnalysisSource::from_label(&source),
                    content_url: row.try_get("content_url").map_err(get_err)?,
                    created_at,
                }))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    #[instrument(skip(self, data, result), fields(filename = %upload.filename))]
    async fn persist(
        &self,
        upload: &Upload,
        data: &[u8],
        result: &AnalysisResult,
    ) -> Result<StoredRecord, AnalysisStoreError> {
        let _ = data;
        self.insert_record(upload, result, None).await
    }

    #[instrument(skip(self), fields(record_id = %id.as_uuid()))]
    async fn get_by_id(&self, id: RecordId) -> Result<Option<AnalysisRecord>, AnalysisStoreError> {
        self.fetch_record(id).await
    }
}
