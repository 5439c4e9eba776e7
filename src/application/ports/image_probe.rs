use async_trait::async_trait;

/// Image-metadata introspection: pixel dimensions and the encoded format.
/// Best-effort; a failure here degrades metadata quality only and never
/// aborts the pipeline.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn probe(&self, data: &[u8]) -> Result<ImageInfo, ImageProbeError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ImageProbeError {
    #[error("unrecognized image format")]
    UnrecognizedFormat,
    #[error("decode failed: {0}")]
    DecodeFailed(String),
}
