use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::RemoteAnalyzer;
use crate::domain::RecordId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct AnalysisRecordResponse {
    pub id: String,
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub title: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub sentiment: String,
    pub complexity: f64,
    pub word_count: i64,
    pub page_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn analysis_record_handler<A>(
    State(state): State<AppState<A>>,
    Path(record_id): Path<String>,
) -> impl IntoResponse
where
    A: RemoteAnalyzer + 'static,
{
    let uuid = match Uuid::parse_str(&record_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid record ID: {}", record_id),
                }),
            )
                .into_response();
        }
    };

    match state.analysis_store.get_by_id(RecordId::from_uuid(uuid)).await {
        Ok(Some(record)) => {
            let response = AnalysisRecordResponse {
                id: record.id.as_uuid().to_string(),
                filename: record.filename,
                mime_type: record.mime_type,
                size_bytes: record.size_bytes,
                title: record.title,
                summary: record.summary,
                keywords: record.keywords,
                sentiment: record.sentiment.as_str().to_string(),
                complexity: record.complexity,
                word_count: record.word_count,
                page_count: record.page_count,
                resolution: record.resolution,
                source: record.source.as_str().to_string(),
                content_url: record.content_url,
                created_at: record.created_at.to_rfc3339(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Analysis not found: {}", record_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch analysis record");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch analysis: {}", e),
                }),
            )
                .into_response()
        }
    }
}
