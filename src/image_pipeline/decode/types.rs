//! Decoded image types

use image::{ColorType, DynamicImage, ImageFormat};

/// A decoded raster, owned by a single conversion
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Pixel grid in whatever color mode the decoder produced
    pub pixels: DynamicImage,
    /// Container format sniffed from the input bytes, if recognized
    pub source_format: Option<ImageFormat>,
}

impl DecodedImage {
    pub fn new(pixels: DynamicImage) -> Self {
        Self {
            pixels,
            source_format: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn color_type(&self) -> ColorType {
        self.pixels.color()
    }

    pub fn has_alpha(&self) -> bool {
        self.pixels.color().has_alpha()
    }
}
