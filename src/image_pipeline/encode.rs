//! Image encoding module
//!
//! This module writes decoded images into icon, PNG or BMP containers.

mod writer;
mod image_crate_writer;
pub mod ico;
pub mod types;

pub use writer::RasterWriter;
pub use image_crate_writer::ImageCrateWriter;
pub use ico::{MAX_ICON_DIMENSION, STANDARD_ICON_SIZES};
pub use types::{OutputFormat, OversizePolicy, ConversionConfig, ConversionConfigBuilder};
