//! VICAR validation utilities
//!
//! Checks run before decoding so that a short or inconsistent file is
//! rejected instead of yielding a partial image.

use log::{debug, warn};
use std::io::SeekFrom;

use crate::io::seekable::SeekableReader;
use crate::vicar::errors::{VicarError, VicarResult};
use crate::vicar::metadata::Metadata;

/// Gets the stream length without moving the read position
///
/// # Returns
/// The length, or `None` if the stream cannot seek to its end
pub fn get_stream_length(reader: &mut dyn SeekableReader) -> VicarResult<Option<u64>> {
    let current_position = reader.stream_position()?;
    let length = match reader.seek(SeekFrom::End(0)) {
        Ok(size) => Some(size),
        Err(e) => {
            warn!("Could not determine stream length: {}", e);
            None
        }
    };
    reader.seek(SeekFrom::Start(current_position))?;

    Ok(length)
}

/// Fails with `TruncatedStream` if the stream is shorter than the geometry requires
pub fn validate_stream_length(reader: &mut dyn SeekableReader, metadata: &Metadata) -> VicarResult<()> {
    let required = metadata.required_length();
    match get_stream_length(reader)? {
        Some(available) if available < required => {
            Err(VicarError::TruncatedStream { expected: required, available })
        }
        Some(available) => {
            debug!("Stream length {} covers required {}", available, required);
            Ok(())
        }
        None => Ok(()),
    }
}

/// Fails unless every image dimension holds at least one sample
///
/// With `N1 = 0` the records carry no pixel bytes, so the stream-length
/// check alone cannot bound the record count.
pub fn validate_geometry(metadata: &Metadata) -> VicarResult<()> {
    validate_dimension(metadata.n1, "N1")?;
    validate_dimension(metadata.n2, "N2")?;
    validate_dimension(metadata.n3, "N3")?;
    Ok(())
}

/// Validates a dimension used for the output image
///
/// # Arguments
/// * `value` - The dimension to check
/// * `name` - Name of the dimension for error messages
///
/// # Returns
/// The dimension as `u32`, or an error if it is zero or too large
pub fn validate_dimension(value: u64, name: &str) -> VicarResult<u32> {
    if value == 0 {
        return Err(VicarError::GenericError(format!("Invalid {}: image has no pixels", name)));
    }
    u32::try_from(value).map_err(|_| {
        VicarError::GenericError(format!("Invalid {}: {} exceeds {}", name, value, u32::MAX))
    })
}
