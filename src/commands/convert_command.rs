//! VICAR to PNG conversion command
//!
//! This module implements the default command: decode the pixel data of
//! a VICAR file and write it as a greyscale PNG.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::converter::{ConversionOptions, VicarConverter};
use crate::utils::logger::Logger;
use crate::utils::string_utils;
use crate::vicar::errors::{VicarError, VicarResult};

/// Command for converting a VICAR file to PNG
pub struct ConvertCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file
    output_file: String,
    /// Conversion settings
    options: ConversionOptions,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// The output path defaults to the input name with its last two
    /// extensions replaced by `.png`.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> VicarResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| VicarError::GenericError("Missing input file".to_string()))?
            .clone();

        let output_file = match args.get_one::<String>("output") {
            Some(path) => path.clone(),
            None => string_utils::default_output_path(&input_file),
        };
        info!("Output file: {}", output_file);

        let options = ConversionOptions {
            legacy_height: args.get_flag("legacy-height"),
            show_progress: args.get_flag("verbose"),
        };

        Ok(ConvertCommand {
            input_file,
            output_file,
            options,
            logger,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> VicarResult<()> {
        let converter = VicarConverter::new(self.logger, self.options);
        let summary = converter.convert_file(&self.input_file, &self.output_file)?;

        info!(
            "Conversion successful: {}x{} {}-bit greyscale",
            summary.width, summary.height, summary.bit_depth
        );
        println!("Wrote {}", summary.output_path);

        Ok(())
    }
}
