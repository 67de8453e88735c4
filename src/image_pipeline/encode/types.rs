//! Output format and conversion configuration types

use std::path::Path;

use image::ImageFormat;

use crate::image_pipeline::encode::ico::STANDARD_ICON_SIZES;

/// Container written by the encoder. Always passed explicitly, so the
/// extension of the output path never decides the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Windows icon container, one PNG-compressed entry per resolution
    #[default]
    Ico,
    Png,
    Bmp,
}

impl OutputFormat {
    /// Infers a format from a path's extension, ignoring case.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "ico" => Some(OutputFormat::Ico),
            "png" => Some(OutputFormat::Png),
            "bmp" => Some(OutputFormat::Bmp),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Ico => "ico",
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Ico => ImageFormat::Ico,
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Bmp => ImageFormat::Bmp,
        }
    }
}

/// What to do with an image larger than the icon container can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OversizePolicy {
    /// Fail with `InvalidDimensions`, writing nothing
    #[default]
    Reject,
    /// Fit inside 256x256 keeping the aspect ratio (Lanczos3)
    Downscale,
}

/// Configuration for image to icon conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Handling of images exceeding the icon size limit
    pub oversize: OversizePolicy,
    /// Extra square resolutions stored next to the decoded one.
    /// Sizes not smaller than the image itself are skipped.
    pub sizes: Vec<u32>,
    /// Whether to reject zero-sized images before encoding
    pub validate_dimensions: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            oversize: OversizePolicy::Reject,
            sizes: Vec::new(),
            validate_dimensions: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }

    /// Desktop icon layout: any photo is fitted inside 256x256 and every
    /// standard resolution below it is stored as well.
    pub fn desktop_icon() -> Self {
        Self::builder()
            .oversize(OversizePolicy::Downscale)
            .sizes(STANDARD_ICON_SIZES)
            .build()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    oversize: Option<OversizePolicy>,
    sizes: Option<Vec<u32>>,
    validate_dimensions: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn oversize(mut self, policy: OversizePolicy) -> Self {
        self.oversize = Some(policy);
        self
    }

    pub fn sizes<I: IntoIterator<Item = u32>>(mut self, sizes: I) -> Self {
        self.sizes = Some(sizes.into_iter().collect());
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            oversize: self.oversize.unwrap_or(default.oversize),
            sizes: self.sizes.unwrap_or(default.sizes),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}
