//! VICAR file reader implementation
//!
//! Opens a file, parses its label and builds the typed metadata. The
//! open stream can be handed on to the pixel extractor, so the file is
//! read through a single buffered handle.

use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::io::seekable::SeekableReader;
use crate::utils::logger::Logger;
use crate::vicar::errors::{VicarError, VicarResult};
use crate::vicar::label::{self, Label};
use crate::vicar::metadata::Metadata;

/// Reader for VICAR files
pub struct VicarReader<'a> {
    /// Logger instance
    logger: &'a Logger,
    /// Current file path
    current_file: Option<String>,
}

impl<'a> VicarReader<'a> {
    /// Creates a new VICAR reader
    pub fn new(logger: &'a Logger) -> Self {
        VicarReader {
            logger,
            current_file: None,
        }
    }

    /// Opens a buffered reader over the given file and remembers its path
    pub fn open(&mut self, filepath: &str) -> VicarResult<BufReader<File>> {
        info!("Opening VICAR file: {}", filepath);
        let file = File::open(Path::new(filepath)).map_err(|e| {
            VicarError::IoError(std::io::Error::new(
                e.kind(),
                format!("cannot open {}: {}", filepath, e),
            ))
        })?;
        self.current_file = Some(filepath.to_string());
        Ok(BufReader::with_capacity(1024 * 1024, file))
    }

    /// Loads the metadata of a VICAR file
    ///
    /// # Arguments
    /// * `filepath` - Path to the VICAR file
    ///
    /// # Returns
    /// The validated metadata together with the open stream, ready for
    /// pixel extraction
    pub fn load(&mut self, filepath: &str) -> VicarResult<(Metadata, BufReader<File>)> {
        let mut reader = self.open(filepath)?;
        let metadata = self.read(&mut reader)?;
        Ok((metadata, reader))
    }

    /// Reads only the label of a VICAR file, without validating geometry
    pub fn load_label(&mut self, filepath: &str) -> VicarResult<Label> {
        let mut reader = self.open(filepath)?;
        self.read_label(&mut reader)
    }

    /// Parses the label from the given reader
    pub fn read_label(&mut self, reader: &mut dyn SeekableReader) -> VicarResult<Label> {
        debug!("VicarReader::read_label starting");
        let label = label::parse_from_reader(reader)?;

        let source = self.current_file.as_deref().unwrap_or("<stream>");
        self.logger.log(&format!("Read label of {} with {} entries", source, label.len()))?;
        Ok(label)
    }

    /// Parses the label and builds the typed metadata
    ///
    /// # Arguments
    /// * `reader` - Any struct implementing the SeekableReader trait
    ///
    /// # Returns
    /// Metadata with every required keyword validated
    pub fn read(&mut self, reader: &mut dyn SeekableReader) -> VicarResult<Metadata> {
        let label = self.read_label(reader)?;
        let metadata = Metadata::from_label(label)?;

        info!(
            "VICAR image: {} samples x {} lines x {} bands, format {}",
            metadata.n1, metadata.n2, metadata.n3, metadata.format
        );
        Ok(metadata)
    }
}
