use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    decode::{RasterReader, ImageCrateReader},
    encode::{RasterWriter, ImageCrateWriter, ConversionConfig, OutputFormat},
};

pub struct ImageConverter<R: RasterReader, W: RasterWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl ImageConverter<ImageCrateReader, ImageCrateWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: ImageCrateWriter,
            config,
        }
    }
}

impl<R: RasterReader, W: RasterWriter> ImageConverter<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Decodes `input_data` and writes it to `output` as `format`.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], format: OutputFormat, output: &mut dyn Write) -> Result<()> {
        info!("Starting conversion to {:?}", format);

        let image = {
            let _span = tracing::info_span!("decode").entered();
            self.reader.read_image(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width(),
                height = image.height()
            ).entered();
            self.validate_dimensions(image.width(), image.height())?;
        }

        {
            let _span = tracing::info_span!("encode").entered();
            self.writer.write_image(&image, format, output, &self.config)?;
        }

        info!(
            width = image.width(),
            height = image.height(),
            "Conversion complete"
        );
        Ok(())
    }

    /// Converts the file at `input_path` into `output_path`.
    ///
    /// `format` is authoritative; the extension of `output_path` is not
    /// consulted. The output only appears once encoding fully succeeded, so
    /// any error leaves an existing file at `output_path` as it was.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        format: OutputFormat,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        self.convert(&input_data, format, &mut encoded)?;

        {
            let _span = tracing::info_span!("persist_output_file", bytes = encoded.len()).entered();
            persist_output(output_path, &encoded)?;
        }

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

/// Writes `data` next to `path` and renames it into place.
fn persist_output(path: &Path, data: &[u8]) -> Result<()> {
    let write_error = |e: std::io::Error| {
        ConversionError::OutputWriteError(format!("{}: {}", path.display(), e))
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(write_error)?;
    staged.write_all(data).map_err(write_error)?;

    // Temporaries are created owner-only; keep what a plain create would give
    let permissions = match std::fs::metadata(path) {
        Ok(existing) if existing.is_file() => Some(existing.permissions()),
        _ => default_permissions(),
    };
    if let Some(permissions) = permissions {
        staged.as_file().set_permissions(permissions).map_err(write_error)?;
    }

    staged.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
    None
}
