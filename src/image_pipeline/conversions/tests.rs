use std::sync::{Arc, Mutex};
use std::io::Write;

use image::{DynamicImage, RgbaImage};

use crate::image_pipeline::common::error::{Result, ConversionError, ErrorKind};
use crate::image_pipeline::conversions::ImageConverter;
use crate::image_pipeline::decode::{DecodedImage, RasterReader};
use crate::image_pipeline::encode::{ConversionConfig, OutputFormat, RasterWriter};

struct MockReader {
    should_fail: bool,
    mock_size: Option<(u32, u32)>,
}

impl RasterReader for MockReader {
    fn read_image(&self, _data: &[u8]) -> Result<DecodedImage> {
        if self.should_fail {
            return Err(ConversionError::DecodeError("Mock decode error".to_string()));
        }
        let (width, height) = self.mock_size.unwrap_or((32, 32));
        Ok(DecodedImage::new(DynamicImage::ImageRgba8(RgbaImage::new(width, height))))
    }
}

struct MockWriter {
    should_fail: bool,
    written: Arc<Mutex<Vec<(u32, u32, OutputFormat)>>>,
}

impl RasterWriter for MockWriter {
    fn write_image(
        &self,
        image: &DecodedImage,
        format: OutputFormat,
        output: &mut dyn Write,
        _config: &ConversionConfig,
    ) -> Result<()> {
        if self.should_fail {
            return Err(ConversionError::EncodeError("Mock encode error".to_string()));
        }
        output.write_all(b"encoded")?;
        self.written.lock().unwrap().push((image.width(), image.height(), format));
        Ok(())
    }
}

fn converter(
    reader: MockReader,
    writer_fails: bool,
    config: ConversionConfig,
) -> (ImageConverter<MockReader, MockWriter>, Arc<Mutex<Vec<(u32, u32, OutputFormat)>>>) {
    let written = Arc::new(Mutex::new(Vec::new()));
    let writer = MockWriter { should_fail: writer_fails, written: written.clone() };
    (ImageConverter::with_custom(reader, writer, config), written)
}

#[test]
fn test_successful_conversion() {
    let reader = MockReader { should_fail: false, mock_size: None };
    let (pipeline, written) = converter(reader, false, ConversionConfig::default());

    let mut output = Vec::new();
    let result = pipeline.convert(b"fake jpeg data", OutputFormat::Ico, &mut output);

    assert!(result.is_ok());
    assert_eq!(output, b"encoded");
    assert_eq!(*written.lock().unwrap(), vec![(32, 32, OutputFormat::Ico)]);
}

#[test]
fn test_format_is_passed_through() {
    let reader = MockReader { should_fail: false, mock_size: None };
    let (pipeline, written) = converter(reader, false, ConversionConfig::default());

    let mut output = Vec::new();
    pipeline.convert(b"fake", OutputFormat::Bmp, &mut output).unwrap();

    assert_eq!(written.lock().unwrap()[0].2, OutputFormat::Bmp);
}

#[test]
fn test_reader_failure() {
    let reader = MockReader { should_fail: true, mock_size: None };
    let (pipeline, written) = converter(reader, false, ConversionConfig::default());

    let mut output = Vec::new();
    let result = pipeline.convert(b"fake jpeg data", OutputFormat::Ico, &mut output);

    let err = result.unwrap_err();
    assert!(matches!(err, ConversionError::DecodeError(_)));
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(written.lock().unwrap().is_empty());
    assert!(output.is_empty());
}

#[test]
fn test_writer_failure() {
    let reader = MockReader { should_fail: false, mock_size: None };
    let (pipeline, _written) = converter(reader, true, ConversionConfig::default());

    let mut output = Vec::new();
    let result = pipeline.convert(b"fake jpeg data", OutputFormat::Ico, &mut output);

    let err = result.unwrap_err();
    assert!(matches!(err, ConversionError::EncodeError(_)));
    assert_eq!(err.kind(), ErrorKind::Encode);
}

#[test]
fn test_zero_sized_image_rejected() {
    let reader = MockReader { should_fail: false, mock_size: Some((0, 16)) };
    let (pipeline, written) = converter(reader, false, ConversionConfig::default());

    let mut output = Vec::new();
    let result = pipeline.convert(b"fake", OutputFormat::Ico, &mut output);

    assert!(matches!(result.unwrap_err(), ConversionError::InvalidDimensions(0, 16)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_dimension_validation_disabled() {
    let reader = MockReader { should_fail: false, mock_size: Some((0, 16)) };
    let config = ConversionConfig::builder()
        .validate_dimensions(false)
        .build();
    let (pipeline, written) = converter(reader, false, config);

    let mut output = Vec::new();
    let result = pipeline.convert(b"fake", OutputFormat::Ico, &mut output);

    assert!(result.is_ok());
    assert_eq!(written.lock().unwrap().len(), 1);
}

#[test]
fn test_set_config_replaces_config() {
    let reader = MockReader { should_fail: false, mock_size: None };
    let (mut pipeline, _written) = converter(reader, false, ConversionConfig::default());

    pipeline.set_config(ConversionConfig::builder().sizes([16]).build());

    assert_eq!(pipeline.config().sizes, vec![16]);
}
