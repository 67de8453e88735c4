//! Image decoding module
//!
//! This module turns encoded image bytes into an in-memory pixel grid.

mod reader;
mod image_crate_reader;
pub mod types;

pub use reader::RasterReader;
pub use image_crate_reader::ImageCrateReader;
pub use types::DecodedImage;
