mod analysis_service;
pub mod keywords;
pub mod readability;
pub mod text_stats;

pub use analysis_service::{fallback_summary_prefix, AnalysisService};
