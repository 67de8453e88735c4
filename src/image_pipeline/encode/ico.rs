//! Icon container frame planning.
//!
//! An ICO file stores each entry's width and height in a single byte, so no
//! entry may exceed 256 pixels on either side. Every entry written here is a
//! PNG-compressed image with 8 bits per channel.

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::DynamicImage;
use tracing::{debug, warn};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::encode::types::{ConversionConfig, OversizePolicy};

/// Largest width or height an icon entry can declare
pub const MAX_ICON_DIMENSION: u32 = 256;

/// The resolutions desktop shells usually look for in an icon
pub const STANDARD_ICON_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Narrows any color mode to the 8-bit layout with the same channels.
pub fn narrow_to_8bit(pixels: &DynamicImage) -> DynamicImage {
    match pixels {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => pixels.clone(),
        DynamicImage::ImageLuma16(_) => DynamicImage::ImageLuma8(pixels.to_luma8()),
        DynamicImage::ImageLumaA16(_) => DynamicImage::ImageLumaA8(pixels.to_luma_alpha8()),
        _ if pixels.color().has_alpha() => DynamicImage::ImageRgba8(pixels.to_rgba8()),
        _ => DynamicImage::ImageRgb8(pixels.to_rgb8()),
    }
}

/// Computes the frames to store, smallest first. The last frame is always
/// the decoded image itself (downscaled only under [`OversizePolicy::Downscale`]).
pub fn plan_icon_frames(pixels: &DynamicImage, config: &ConversionConfig) -> Result<Vec<DynamicImage>> {
    let (width, height) = (pixels.width(), pixels.height());
    let narrowed = narrow_to_8bit(pixels);

    let base = if width > MAX_ICON_DIMENSION || height > MAX_ICON_DIMENSION {
        match config.oversize {
            OversizePolicy::Reject => {
                warn!(
                    "Image dimensions {}x{} exceed icon maximum {}",
                    width, height, MAX_ICON_DIMENSION
                );
                return Err(ConversionError::InvalidDimensions(width, height));
            }
            OversizePolicy::Downscale => {
                let fitted = narrowed.resize(MAX_ICON_DIMENSION, MAX_ICON_DIMENSION, FilterType::Lanczos3);
                debug!(
                    "Downscaled {}x{} to {}x{}",
                    width, height, fitted.width(), fitted.height()
                );
                fitted
            }
        }
    } else {
        narrowed
    };

    let longest = base.width().max(base.height());
    let mut extra: Vec<u32> = config
        .sizes
        .iter()
        .copied()
        .filter(|&size| size > 0 && size < longest)
        .collect();
    extra.sort_unstable();
    extra.dedup();

    let mut frames: Vec<DynamicImage> = extra
        .into_iter()
        .map(|size| base.resize(size, size, FilterType::Lanczos3))
        .collect();
    frames.push(base);

    Ok(frames)
}

/// Writes `frames` as one ICO container into `buffer`.
pub fn encode_ico(frames: &[DynamicImage], buffer: &mut Vec<u8>) -> Result<()> {
    let entries = frames
        .iter()
        .map(|frame| {
            IcoFrame::as_png(frame.as_bytes(), frame.width(), frame.height(), frame.color().into())
                .map_err(|e| ConversionError::EncodeError(e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    IcoEncoder::new(buffer)
        .encode_images(&entries)
        .map_err(|e| ConversionError::EncodeError(e.to_string()))
}
