use anyhow::Context;
use icon_convert::image_pipeline::{ConversionConfig, ImageConverter, OutputFormat};
use icon_convert::logger;

use tracing::info;

const INPUT_PATH: &str = "Untitled.jpg";
const OUTPUT_PATH: &str = "icon.ico";

fn main() -> anyhow::Result<()> {
    logger::init();

    let converter = ImageConverter::new(ConversionConfig::desktop_icon());

    info!(
        oversize = ?converter.config().oversize,
        sizes = ?converter.config().sizes,
        "Icon layout"
    );

    // Reported once, by the error returned from main
    converter
        .convert_file(INPUT_PATH, OUTPUT_PATH, OutputFormat::Ico)
        .with_context(|| format!("Conversion failed: {INPUT_PATH} -> {OUTPUT_PATH}"))?;

    info!("Conversion successful!");
    Ok(())
}
