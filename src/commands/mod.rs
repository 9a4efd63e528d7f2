//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod convert_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::{analysis_report, AnalyzeCommand};
pub use convert_command::ConvertCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::vicar::errors::VicarResult;

/// Factory for creating command instances based on CLI arguments
pub struct VicarkitCommandFactory;

impl VicarkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        VicarkitCommandFactory
    }
}

impl Default for VicarkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for VicarkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> VicarResult<Box<dyn Command + 'a>> {
        if args.get_flag("info") {
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        } else {
            // Default to conversion
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        }
    }
}
