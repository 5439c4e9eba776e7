use std::sync::Arc;

use crate::application::ports::{AnalysisStore, RemoteAnalyzer};
use crate::application::services::AnalysisService;
use crate::presentation::config::Settings;

pub struct AppState<A>
where
    A: RemoteAnalyzer,
{
    pub analysis_service: Arc<AnalysisService<A>>,
    pub analysis_store: Arc<dyn AnalysisStore>,
    pub settings: Settings,
}

impl<A> Clone for AppState<A>
where
    A: RemoteAnalyzer,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            analysis_store: Arc::clone(&self.analysis_store),
            settings: self.settings.clone(),
        }
    }
}
