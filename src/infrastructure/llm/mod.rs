mod gemini_client;
mod mock_remote_analyzer;
mod payload;

pub use gemini_client::{GeminiClient, DEFAULT_BASE_URL};
pub use mock_remote_analyzer::MockRemoteAnalyzer;
pub use payload::{parse_analysis_payload, strip_code_fences};
