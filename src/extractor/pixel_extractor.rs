//! Pixel data extraction
//!
//! Pixel records follow the label and `NLB` binary header records. Each
//! record is `NBB` bytes of binary prefix followed by `N1` samples; there
//! are `N2 * N3` records, all rows of band 0 before those of band 1.

use log::{debug, info};
use std::io::{self, ErrorKind, SeekFrom};

use crate::io::seekable::SeekableReader;
use crate::utils::progress::ProgressTracker;
use crate::vicar::errors::{VicarError, VicarResult};
use crate::vicar::metadata::Metadata;
use crate::vicar::validation;

use super::decoder::{DecoderFactory, SampleDecoder};
use super::grid::PixelGrid;

/// Decodes the pixel records of a VICAR image
pub struct PixelExtractor {
    /// Whether to draw a progress bar over the records
    show_progress: bool,
}

impl PixelExtractor {
    pub fn new() -> Self {
        PixelExtractor { show_progress: false }
    }

    /// Enables or disables the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Extracts every pixel record into a grid
    ///
    /// # Arguments
    /// * `metadata` - Validated image metadata
    /// * `reader` - Stream over the whole file
    ///
    /// # Returns
    /// The decoded grid, `UnsupportedFormat` for formats other than BYTE
    /// and HALF, an error for geometry without pixels, or `TruncatedStream`
    /// if the records run past the end of the stream. No partial grid is ever returned.
    pub fn extract(&self, metadata: &Metadata, reader: &mut dyn SeekableReader) -> VicarResult<PixelGrid> {
        let decoder = DecoderFactory::create_decoder(metadata.format, metadata.byte_order)?;
        validation::validate_geometry(metadata)?;
        validation::validate_stream_length(reader, metadata)?;

        let records = usize::try_from(metadata.record_count())
            .map_err(|_| VicarError::GenericError("record count exceeds address space".to_string()))?;
        let samples = usize::try_from(metadata.n1)
            .map_err(|_| VicarError::GenericError("N1 exceeds address space".to_string()))?;
        let prefix_len = usize::try_from(metadata.nbb)
            .map_err(|_| VicarError::GenericError("NBB exceeds address space".to_string()))?;

        let offset = metadata.data_offset();
        debug!("Seeking to pixel data at offset {}", offset);
        reader.seek(SeekFrom::Start(offset))?;

        let mut grid = decoder.empty_grid(records);
        let mut prefix = vec![0u8; prefix_len];

        let progress = if self.show_progress {
            ProgressTracker::new(records as u64, "Decoding records")
        } else {
            ProgressTracker::hidden()
        };

        for record in 0..records {
            let result = read_record(reader, &mut prefix, decoder.as_ref(), samples, &mut grid);

            if let Err(e) = result {
                progress.abandon("Decoding failed");
                return Err(match e.kind() {
                    ErrorKind::UnexpectedEof => truncated(reader, metadata, record),
                    _ => VicarError::IoError(e),
                });
            }
            progress.increment(1);
        }

        progress.finish();
        info!("Extracted {} rows of {} {} samples", grid.height(), samples, metadata.format);
        Ok(grid)
    }
}

impl Default for PixelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the pixel grid without progress reporting
pub fn extract(metadata: &Metadata, reader: &mut dyn SeekableReader) -> VicarResult<PixelGrid> {
    PixelExtractor::new().extract(metadata, reader)
}

/// Skips the record's binary prefix and decodes its samples
fn read_record(
    mut reader: &mut dyn SeekableReader,
    prefix: &mut [u8],
    decoder: &dyn SampleDecoder,
    samples: usize,
    grid: &mut PixelGrid,
) -> io::Result<()> {
    reader.read_exact(prefix)?;
    decoder.read_row(&mut reader, samples, grid)
}

/// Builds the error for a short read in the given record
fn truncated(reader: &mut dyn SeekableReader, metadata: &Metadata, record: usize) -> VicarError {
    let record_size = metadata.nbb.saturating_add(metadata.row_bytes());
    let record_start = metadata
        .data_offset()
        .saturating_add((record as u64).saturating_mul(record_size));
    let available = validation::get_stream_length(reader)
        .ok()
        .flatten()
        .unwrap_or(record_start);

    debug!("Short read in record {} (starts at byte {})", record, record_start);
    VicarError::TruncatedStream { expected: metadata.required_length(), available }
}
