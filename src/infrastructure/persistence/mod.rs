mod blob_analysis_store;
mod mock_analysis_store;
mod mock_record_store;
mod pg_analysis_store;
mod pg_pool;
mod store_factory;

pub use blob_analysis_store::BlobAnalysisStore;
pub use mock_analysis_store::MockAnalysisStore;
pub use mock_record_store::MockRecordStore;
pub use pg_analysis_store::PgAnalysisStore;
pub use pg_pool::create_pool;
pub use store_factory::AnalysisStoreFactory;
