use std::path::PathBuf;
use std::sync::Arc;

use sqlx::PgPool;

use crate::application::ports::{AnalysisStore, AnalysisStoreError};
use crate::infrastructure::storage::LocalBlobStore;
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::blob_analysis_store::BlobAnalysisStore;
use super::pg_analysis_store::PgAnalysisStore;

pub struct AnalysisStoreFactory;

impl AnalysisStoreFactory {
    pub fn create(
        settings: &StorageSettings,
        pool: PgPool,
    ) -> Result<Arc<dyn AnalysisStore>, AnalysisStoreError> {
        match settings.provider {
            StorageProviderSetting::Relational => Ok(Arc::new(PgAnalysisStore::new(pool))),
            StorageProviderSetting::ObjectStorage => {
                let blob_store = LocalBlobStore::new(
                    PathBuf::from(&settings.local_path),
                    settings.public_base_url.clone(),
                )
                .map_err(|e| AnalysisStoreError::ConnectionFailed(e.to_string()))?;

                Ok(Arc::new(BlobAnalysisStore::new(
                    Arc::new(blob_store),
                    Arc::new(PgAnalysisStore::new(pool)),
                )))
            }
        }
    }
}
