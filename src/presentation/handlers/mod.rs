mod analysis_record;
mod health;
mod upload;

pub use analysis_record::analysis_record_handler;
pub use health::health_handler;
pub use upload::upload_handler;
