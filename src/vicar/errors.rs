//! Custom error types for VICAR processing

use std::fmt;
use std::io;

/// VICAR-specific error types
#[derive(Debug)]
pub enum VicarError {
    /// I/O error
    IoError(io::Error),
    /// Missing or unreadable `LBLSIZE=` prefix, or a label shorter than announced
    MalformedHeader(String),
    /// Required label keyword absent or of the wrong type
    MissingField(String),
    /// Pixel format this crate cannot decode
    UnsupportedFormat(String),
    /// Fewer bytes available than the image geometry requires
    TruncatedStream { expected: u64, available: u64 },
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for VicarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VicarError::IoError(e) => write!(f, "I/O error: {}", e),
            VicarError::MalformedHeader(msg) => write!(f, "Malformed VICAR header: {}", msg),
            VicarError::MissingField(key) => write!(f, "Missing or invalid label field: {}", key),
            VicarError::UnsupportedFormat(format) => write!(f, "Unsupported pixel format: {}", format),
            VicarError::TruncatedStream { expected, available } => write!(
                f,
                "Truncated image data: needed {} bytes, only {} available",
                expected, available
            ),
            VicarError::GenericError(msg) => write!(f, "VICAR error: {}", msg),
        }
    }
}

impl std::error::Error for VicarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VicarError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for VicarError {
    fn from(error: io::Error) -> Self {
        VicarError::IoError(error)
    }
}

impl From<String> for VicarError {
    fn from(msg: String) -> Self {
        VicarError::GenericError(msg)
    }
}

impl From<image::ImageError> for VicarError {
    fn from(error: image::ImageError) -> Self {
        match error {
            image::ImageError::IoError(e) => VicarError::IoError(e),
            other => VicarError::GenericError(format!("Image encoding failed: {}", other)),
        }
    }
}

/// Result type for VICAR operations
pub type VicarResult<T> = Result<T, VicarError>;
