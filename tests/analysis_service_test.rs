use std::sync::Arc;

use filesense::application::ports::{ImageInfo, RemoteAnalysis};
use filesense::application::services::readability::reading_ease;
use filesense::application::services::{fallback_summary_prefix, AnalysisService};
use filesense::domain::{AnalysisSource, Sentiment};
use filesense::infrastructure::extraction::{MockDocumentExtractor, MockImageProbe};
use filesense::infrastructure::llm::MockRemoteAnalyzer;

fn remote_analysis() -> RemoteAnalysis {
    RemoteAnalysis {
        summary: "A short document about cats.".to_string(),
        keywords: vec![
            "cats".to_string(),
            "sleep".to_string(),
            "habits".to_string(),
            "pets".to_string(),
            "behavior".to_string(),
        ],
        sentiment: Sentiment::Positive,
        complexity: 42.0,
        word_count: Some(999),
        page_count: Some(3),
    }
}

fn service(remote: MockRemoteAnalyzer) -> AnalysisService<MockRemoteAnalyzer> {
    AnalysisService::new(
        Arc::new(MockDocumentExtractor::with_text("word document text")),
        Arc::new(MockImageProbe::failing()),
        Arc::new(remote),
    )
}

#[tokio::test]
async fn given_successful_remote_call_when_analyzing_text_then_result_mirrors_remote_fields() {
    let service = service(MockRemoteAnalyzer::succeeding(remote_analysis()));

    let result = service
        .analyze(b"Cats sleep a lot.", "text/plain", "cats.txt")
        .await;

    assert_eq!(result.summary, "A short document about cats.");
    assert_eq!(result.keywords.len(), 5);
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.complexity, Some(42.0));
    assert_eq!(result.source, AnalysisSource::Remote);
}

#[tokio::test]
async fn given_local_word_count_when_remote_estimates_one_then_local_value_wins() {
    let service = service(MockRemoteAnalyzer::succeeding(remote_analysis()));

    let result = service
        .analyze(b"The quick brown fox jumps.", "text/plain", "fox.txt")
        .await;

    // 5 local tokens beat the model's 999 estimate.
    assert_eq!(result.metadata.word_count, Some(5));
}

#[tokio::test]
async fn given_pdf_with_no_local_extraction_when_remote_succeeds_then_estimates_backfill_metadata()
{
    let service = service(MockRemoteAnalyzer::succeeding(remote_analysis()));

    let result = service
        .analyze(b"%PDF-1.4 fake", "application/pdf", "report.pdf")
        .await;

    assert_eq!(result.metadata.format.as_deref(), Some("pdf"));
    assert_eq!(result.metadata.word_count, Some(999));
    assert_eq!(result.metadata.page_count, Some(3));
    assert_eq!(result.text, None);
}

#[tokio::test]
async fn given_remote_failure_with_text_when_analyzing_then_heuristics_fill_the_result() {
    let service = service(MockRemoteAnalyzer::failing());
    let text = "Cats sleep a lot. Dogs run fast.";

    let result = service.analyze(text.as_bytes(), "text/plain", "pets.txt").await;

    assert_eq!(result.source, AnalysisSource::Heuristic);
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.complexity, Some(reading_ease(text)));
    assert!(result.summary.starts_with(fallback_summary_prefix()));
    assert!(result.keywords.len() <= 5);
    assert_eq!(result.keywords, vec!["cats", "sleep", "dogs", "fast"]);
}

#[tokio::test]
async fn given_remote_failure_and_no_text_when_analyzing_then_result_reports_failed_analysis() {
    let service = service(MockRemoteAnalyzer::failing());

    let result = service
        .analyze(b"%PDF-1.4 fake", "application/pdf", "report.pdf")
        .await;

    assert_eq!(result.source, AnalysisSource::Failed);
    assert_eq!(
        result.summary,
        "Analysis failed and no text could be extracted."
    );
    assert!(result.keywords.is_empty());
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(result.complexity, None);
}

#[tokio::test]
async fn given_image_probe_failure_when_analyzing_then_format_degrades_to_mime_subtype() {
    let service = AnalysisService::new(
        Arc::new(MockDocumentExtractor::with_text("")),
        Arc::new(MockImageProbe::failing()),
        Arc::new(MockRemoteAnalyzer::failing()),
    );

    let result = service.analyze(b"not an image", "image/png", "photo.png").await;

    assert_eq!(result.metadata.format.as_deref(), Some("png"));
    assert_eq!(result.metadata.resolution, None);
    assert_eq!(result.metadata.dimensions, None);
}

#[tokio::test]
async fn given_image_probe_success_when_analyzing_then_metadata_carries_dimensions() {
    let service = AnalysisService::new(
        Arc::new(MockDocumentExtractor::with_text("")),
        Arc::new(MockImageProbe::with_info(ImageInfo {
            width: 640,
            height: 480,
            format: "jpeg".to_string(),
        })),
        Arc::new(MockRemoteAnalyzer::succeeding(remote_analysis())),
    );

    let result = service.analyze(b"fake jpeg", "image/jpeg", "photo.jpg").await;

    assert_eq!(result.metadata.resolution.as_deref(), Some("640x480"));
    assert_eq!(result.metadata.format.as_deref(), Some("jpeg"));
    let dims = result.metadata.dimensions.expect("dimensions set");
    assert_eq!((dims.width, dims.height), (640, 480));
}

#[tokio::test]
async fn given_word_document_when_extraction_succeeds_then_text_and_word_count_are_local() {
    let service = AnalysisService::new(
        Arc::new(MockDocumentExtractor::with_text("alpha beta gamma")),
        Arc::new(MockImageProbe::failing()),
        Arc::new(MockRemoteAnalyzer::succeeding(remote_analysis())),
    );

    let result = service
        .analyze(
            b"fake docx bytes",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "notes.docx",
        )
        .await;

    assert_eq!(result.text.as_deref(), Some("alpha beta gamma"));
    assert_eq!(result.metadata.word_count, Some(3));
}

#[tokio::test]
async fn given_word_extraction_failure_when_analyzing_then_pipeline_reports_critical_failure() {
    let service = AnalysisService::new(
        Arc::new(MockDocumentExtractor::failing()),
        Arc::new(MockImageProbe::failing()),
        Arc::new(MockRemoteAnalyzer::succeeding(remote_analysis())),
    );

    let result = service
        .analyze(b"broken", "application/msword", "legacy.doc")
        .await;

    assert_eq!(result.source, AnalysisSource::Failed);
    assert_eq!(result.summary, "Critical failure in analysis pipeline.");
    assert_eq!(result.sentiment, Sentiment::Neutral);
}

#[tokio::test]
async fn given_identical_input_and_deterministic_remote_when_analyzing_twice_then_results_match() {
    let service = service(MockRemoteAnalyzer::succeeding(remote_analysis()));

    let first = service
        .analyze(b"Cats sleep a lot.", "text/plain", "cats.txt")
        .await;
    let second = service
        .analyze(b"Cats sleep a lot.", "text/plain", "cats.txt")
        .await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_invalid_utf8_text_when_analyzing_then_decode_is_lossy_and_completes() {
    let service = service(MockRemoteAnalyzer::failing());

    let result = service
        .analyze(&[0x66, 0x6f, 0x6f, 0xff, 0x20, 0x62, 0x61, 0x72], "text/plain", "raw.txt")
        .await;

    assert_eq!(result.source, AnalysisSource::Heuristic);
    assert!(result.text.is_some());
}
