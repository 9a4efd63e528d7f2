//! VICAR to PNG conversion
//!
//! Ties the reader, the pixel extractor and the PNG writer together for
//! one input file.

use log::info;

use crate::extractor::PixelExtractor;
use crate::output::{HeightPolicy, PngWriter};
use crate::utils::logger::Logger;
use crate::vicar::errors::VicarResult;
use crate::vicar::format::PixelFormat;
use crate::vicar::VicarReader;

/// Settings for a conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Use `N1 * N3` as the output height
    pub legacy_height: bool,
    /// Draw a progress bar while decoding records
    pub show_progress: bool,
}

impl ConversionOptions {
    fn height_policy(&self) -> HeightPolicy {
        if self.legacy_height {
            HeightPolicy::Legacy
        } else {
            HeightPolicy::DecodedRows
        }
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub output_path: String,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub bit_depth: u8,
}

/// Converts VICAR files to greyscale PNG
pub struct VicarConverter<'a> {
    logger: &'a Logger,
    options: ConversionOptions,
}

impl<'a> VicarConverter<'a> {
    pub fn new(logger: &'a Logger, options: ConversionOptions) -> Self {
        VicarConverter { logger, options }
    }

    /// Converts `input_path` into a PNG at `output_path`
    ///
    /// Nothing is written unless the label parses and every pixel record
    /// decodes.
    pub fn convert_file(&self, input_path: &str, output_path: &str) -> VicarResult<ConversionSummary> {
        info!("Converting {} to {}", input_path, output_path);

        let mut reader = VicarReader::new(self.logger);
        let (metadata, mut stream) = reader.load(input_path)?;

        let grid = PixelExtractor::new()
            .with_progress(self.options.show_progress)
            .extract(&metadata, &mut stream)?;

        let writer = PngWriter::new(self.options.height_policy());
        let (width, height) = writer.write(&grid, &metadata, output_path)?;

        self.logger.log(&format!(
            "Converted {} -> {} ({}x{}, {})",
            input_path, output_path, width, height, metadata.format
        ))?;

        Ok(ConversionSummary {
            output_path: output_path.to_string(),
            width,
            height,
            format: metadata.format,
            bit_depth: metadata.format.bit_depth(),
        })
    }
}
