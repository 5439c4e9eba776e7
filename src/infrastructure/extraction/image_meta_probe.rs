use std::io::Cursor;

use async_trait::async_trait;
use image::ImageReader;

use crate::application::ports::{ImageInfo, ImageProbe, ImageProbeError};

/// Reads pixel dimensions and the encoded format from image headers without
/// decoding the full bitmap.
#[derive(Default)]
pub struct ImageMetaProbe;

impl ImageMetaProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageProbe for ImageMetaProbe {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn probe(&self, data: &[u8]) -> Result<ImageInfo, ImageProbeError> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ImageProbeError::DecodeFailed(e.to_string()))?;

        let format = reader.format().ok_or(ImageProbeError::UnrecognizedFormat)?;

        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| ImageProbeError::DecodeFailed(e.to_string()))?;

        let subtype = format
            .to_mime_type()
            .split('/')
            .nth(1)
            .unwrap_or("unknown")
            .to_string();

        Ok(ImageInfo {
            width,
            height,
            format: subtype,
        })
    }
}
