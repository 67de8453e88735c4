use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::decode::types::DecodedImage;

pub trait RasterReader {
    fn read_image(&self, data: &[u8]) -> Result<DecodedImage>;
}
