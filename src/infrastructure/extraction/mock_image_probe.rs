use crate::application::ports::{ImageInfo, ImageProbe, ImageProbeError};

pub struct MockImageProbe {
    info: Option<ImageInfo>,
}

impl MockImageProbe {
    pub fn with_info(info: ImageInfo) -> Self {
        Self { info: Some(info) }
    }

    pub fn failing() -> Self {
        Self { info: None }
    }
}

#[async_trait::async_trait]
impl ImageProbe for MockImageProbe {
    async fn probe(&self, _data: &[u8]) -> Result<ImageInfo, ImageProbeError> {
        match &self.info {
            Some(info) => Ok(info.clone()),
            None => Err(ImageProbeError::DecodeFailed(
                "mock probe failure".to_string(),
            )),
        }
    }
}
