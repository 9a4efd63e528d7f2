use crate::commands::analysis_report;
use crate::converter::{ConversionOptions, ConversionSummary, VicarConverter};
use crate::extractor::{PixelExtractor, PixelGrid};
use crate::utils::logger::Logger;
use crate::utils::string_utils;
use crate::vicar::errors::VicarResult;
use crate::vicar::{Metadata, VicarReader};

/// Main interface to the VicarKit library
pub struct VicarKit {
    logger: Logger,
    options: ConversionOptions,
}

impl VicarKit {
    /// Create a new VicarKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to a log file; without one nothing is logged to disk
    ///
    /// # Returns
    /// A VicarKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> VicarResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(VicarKit { logger, options: ConversionOptions::default() })
    }

    /// Replace the conversion settings
    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    /// Analyze a VICAR file and return its label listing and geometry
    pub fn analyze(&self, input_path: &str) -> VicarResult<String> {
        let mut reader = VicarReader::new(&self.logger);
        let label = reader.load_label(input_path)?;
        Ok(analysis_report(input_path, &label))
    }

    /// Read the validated metadata of a VICAR file
    pub fn metadata(&self, input_path: &str) -> VicarResult<Metadata> {
        let mut reader = VicarReader::new(&self.logger);
        let (metadata, _) = reader.load(input_path)?;
        Ok(metadata)
    }

    /// Decode the pixel data of a VICAR file
    ///
    /// # Returns
    /// The metadata together with the decoded grid
    pub fn decode(&self, input_path: &str) -> VicarResult<(Metadata, PixelGrid)> {
        let mut reader = VicarReader::new(&self.logger);
        let (metadata, mut stream) = reader.load(input_path)?;
        let grid = PixelExtractor::new()
            .with_progress(self.options.show_progress)
            .extract(&metadata, &mut stream)?;
        Ok((metadata, grid))
    }

    /// Convert a VICAR file to a greyscale PNG
    ///
    /// # Arguments
    /// * `input_path` - Path to the VICAR file
    /// * `output_path` - Output path; derived from the input name when `None`
    pub fn convert(&self, input_path: &str, output_path: Option<&str>) -> VicarResult<ConversionSummary> {
        let output = match output_path {
            Some(path) => path.to_string(),
            None => string_utils::default_output_path(input_path),
        };

        VicarConverter::new(&self.logger, self.options).convert_file(input_path, &output)
    }
}
