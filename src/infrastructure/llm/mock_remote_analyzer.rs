use crate::application::ports::{
    AnalysisRequest, RemoteAnalysis, RemoteAnalyzer, RemoteAnalyzerError,
};

pub struct MockRemoteAnalyzer {
    response: Option<RemoteAnalysis>,
}

impl MockRemoteAnalyzer {
    pub fn succeeding(response: RemoteAnalysis) -> Self {
        Self {
            response: Some(response),
        }
    }

    pub fn failing() -> Self {
        Self { response: None }
    }
}

#[async_trait::async_trait]
impl RemoteAnalyzer for MockRemoteAnalyzer {
    async fn analyze(
        &self,
        _request: &AnalysisRequest,
    ) -> Result<RemoteAnalysis, RemoteAnalyzerError> {
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Err(RemoteAnalyzerError::RequestFailed(
                "mock remote failure".to_string(),
            )),
        }
    }
}
