//! Image processing pipeline module
//!
//! This module converts a single image file into another container format,
//! an icon by default, with separate modules for decoding, encoding, and
//! conversion orchestration.

pub mod decode;
pub mod encode;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    ErrorKind,
    Result,
};

pub use decode::{
    DecodedImage,
    RasterReader,
    ImageCrateReader,
};

pub use encode::{
    OutputFormat,
    OversizePolicy,
    ConversionConfig,
    ConversionConfigBuilder,
    RasterWriter,
    ImageCrateWriter,
    MAX_ICON_DIMENSION,
    STANDARD_ICON_SIZES,
};

pub use conversions::{
    ImageConverter,
};
