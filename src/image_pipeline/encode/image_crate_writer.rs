use std::io::{Cursor, Write};
use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::decode::types::DecodedImage;
use crate::image_pipeline::encode::ico::{encode_ico, narrow_to_8bit, plan_icon_frames};
use crate::image_pipeline::encode::types::{ConversionConfig, OutputFormat};
use crate::image_pipeline::encode::writer::RasterWriter;

pub struct ImageCrateWriter;

impl RasterWriter for ImageCrateWriter {
    fn write_image(
        &self,
        image: &DecodedImage,
        format: OutputFormat,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()> {
        debug!("Encoding {:?} image: {}x{}", format, image.width(), image.height());

        let mut buffer = Vec::new();

        match format {
            OutputFormat::Ico => {
                let frames = plan_icon_frames(&image.pixels, config)?;
                debug!("Writing {} icon frame(s)", frames.len());
                encode_ico(&frames, &mut buffer)?;
            }
            OutputFormat::Png | OutputFormat::Bmp => {
                narrow_to_8bit(&image.pixels)
                    .write_to(&mut Cursor::new(&mut buffer), format.image_format())
                    .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
            }
        }

        output.write_all(&buffer)?;

        debug!("{:?} encoding complete, {} bytes", format, buffer.len());
        Ok(())
    }
}
