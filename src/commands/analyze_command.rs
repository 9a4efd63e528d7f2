//! VICAR label analysis command
//!
//! This module implements the command for listing the label of a VICAR
//! file and the image geometry derived from it.

use clap::ArgMatches;
use log::{debug, info};
use std::fmt::Write as _;

use crate::commands::command_traits::Command;
use crate::utils::logger::Logger;
use crate::vicar::errors::{VicarError, VicarResult};
use crate::vicar::keywords::{describe_keyword, keyword_section};
use crate::vicar::{Label, Metadata, VicarReader};

/// Command for analyzing a VICAR label
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> VicarResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| VicarError::GenericError("Missing input file".to_string()))?
            .clone();

        Ok(AnalyzeCommand {
            input_file,
            logger,
        })
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> VicarResult<()> {
        info!("Analyzing VICAR file: {}", self.input_file);

        let mut reader = VicarReader::new(self.logger);
        let label = reader.load_label(&self.input_file)?;
        let report = analysis_report(&self.input_file, &label);

        println!("{}", report);
        self.logger.log(&report)?;
        debug!("Analysis complete");

        Ok(())
    }
}

/// Formats the label listing and derived geometry of a file
///
/// Geometry problems are reported in the text rather than as an error,
/// so a label that cannot be converted can still be inspected.
pub fn analysis_report(input_file: &str, label: &Label) -> String {
    let mut report = String::new();

    let _ = writeln!(report, "VICAR Analysis Results:");
    let _ = writeln!(report, "  File: {}", input_file);
    if let Some(size) = label.label_size() {
        let _ = writeln!(report, "  Label size: {} bytes", size);
    }
    let _ = writeln!(report, "  Number of entries: {}", label.len());

    let _ = writeln!(report, "\nLabel:");
    for (key, value) in label.iter() {
        let section = keyword_section(key).map_or(String::new(), |s| format!("[{}]", s));
        let _ = writeln!(
            report,
            "  {:<12} = {:<24} {:<10} {}",
            key,
            value.to_string(),
            section,
            describe_keyword(key)
        );
    }

    let _ = writeln!(report);
    match Metadata::from_label(label.clone()) {
        Ok(metadata) => {
            let _ = write!(report, "{}", metadata);
            if !metadata.format.is_supported() {
                let _ = writeln!(report, "  Note: {} samples cannot be converted", metadata.format);
            }
        }
        Err(e) => {
            let _ = writeln!(report, "Image geometry unavailable: {}", e);
        }
    }

    report
}
