use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::decode::types::DecodedImage;
use crate::image_pipeline::encode::types::{ConversionConfig, OutputFormat};

pub trait RasterWriter {
    fn write_image(
        &self,
        image: &DecodedImage,
        format: OutputFormat,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>;
}
