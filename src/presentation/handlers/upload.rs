use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::RemoteAnalyzer;
use crate::domain::{AnalysisResult, Upload};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    pub analysis: AnalysisResult,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts one multipart file, runs the analysis pipeline, and persists the
/// result. Analysis itself never fails the request; only a missing file or
/// a persistence error does.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<A>(
    State(state): State<AppState<A>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    A: RemoteAnalyzer + 'static,
{
    // The upload lives in the "file" field; anything else is skipped.
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some("file") => break f,
            Ok(Some(f)) => {
                tracing::debug!(field = ?f.name(), "Skipping non-file multipart field");
            }
            Ok(None) => {
                tracing::warn!("Upload request without a file field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "No file uploaded".to_string(),
                    }),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let mime_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, mime_type = %mime_type, bytes = data.len(), "Processing file upload");

    let upload = Upload::new(filename, mime_type, data.len() as u64);

    let result = state
        .analysis_service
        .analyze(&data, &upload.mime_type, &upload.filename)
        .await;

    match state.analysis_store.persist(&upload, &data, &result).await {
        Ok(stored) => {
            tracing::info!(
                record_id = %stored.id.as_uuid(),
                filename = %upload.filename,
                source = %result.source.as_str(),
                "Analysis persisted"
            );
            (
                StatusCode::CREATED,
                Json(UploadResponse {
                    success: true,
                    id: stored.id.as_uuid().to_string(),
                    content_url: stored.content_url,
                    analysis: result,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to persist analysis");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to persist analysis: {}", e),
                }),
            )
                .into_response()
        }
    }
}
