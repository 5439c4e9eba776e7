use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use filesense::application::services::AnalysisService;
use filesense::infrastructure::extraction::{DocxExtractor, ImageMetaProbe};
use filesense::infrastructure::llm::GeminiClient;
use filesense::infrastructure::observability::init_tracing;
use filesense::infrastructure::persistence::{create_pool, AnalysisStoreFactory};
use filesense::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(&settings.logging, settings.server.port);

    let document_extractor = Arc::new(DocxExtractor::new());
    let image_probe = Arc::new(ImageMetaProbe::new());
    let remote_analyzer = Arc::new(GeminiClient::new(
        settings.gemini.api_key.clone(),
        settings.gemini.model.clone(),
        settings.gemini.base_url.clone(),
    ));

    let analysis_service = Arc::new(AnalysisService::new(
        document_extractor,
        image_probe,
        remote_analyzer,
    ));

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    let analysis_store = AnalysisStoreFactory::create(&settings.storage, pool)?;

    let state = AppState {
        analysis_service,
        analysis_store,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let host: std::net::IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
