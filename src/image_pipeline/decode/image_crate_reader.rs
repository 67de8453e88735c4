//! Image reader backed by the `image` crate.
//!
//! Any container the crate was built with can be decoded here (JPEG, PNG,
//! BMP, GIF, ICO, TIFF, WebP). The format is sniffed from the leading magic
//! bytes, never from a file name.

use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::decode::types::DecodedImage;
use crate::image_pipeline::decode::reader::RasterReader;

pub struct ImageCrateReader;

impl RasterReader for ImageCrateReader {
    /// Decodes `data` into a [`DecodedImage`].
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::DecodeError`] if the bytes are not a
    /// recognized image encoding or the stream is corrupt.
    fn read_image(&self, data: &[u8]) -> Result<DecodedImage> {
        debug!("Decoding image, {} bytes", data.len());

        let source_format = image::guess_format(data)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let pixels = image::load_from_memory_with_format(data, source_format)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded {:?} image: {}x{} {:?}",
            source_format,
            pixels.width(),
            pixels.height(),
            pixels.color()
        );

        Ok(DecodedImage {
            pixels,
            source_format: Some(source_format),
        })
    }
}
