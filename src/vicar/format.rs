//! Pixel sample formats
//!
//! Maps the FORMAT keyword onto a sample width. Only BYTE and HALF can
//! be decoded; the remaining VICAR formats are known by name so they can
//! be reported precisely.

use std::fmt;
use std::str::FromStr;

use crate::vicar::errors::VicarError;

/// VICAR pixel sample format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Unsigned 8-bit integer
    Byte,
    /// Signed 16-bit integer
    Half,
    /// Signed 32-bit integer
    Full,
    /// 32-bit float
    Real,
    /// 64-bit float
    Doub,
    /// Pair of 32-bit floats
    Comp,
}

impl PixelFormat {
    /// Bytes per sample
    pub fn width(&self) -> usize {
        match self {
            PixelFormat::Byte => 1,
            PixelFormat::Half => 2,
            PixelFormat::Full | PixelFormat::Real => 4,
            PixelFormat::Doub | PixelFormat::Comp => 8,
        }
    }

    /// Returns the keyword spelling of this format
    pub fn name(&self) -> &'static str {
        match self {
            PixelFormat::Byte => "BYTE",
            PixelFormat::Half => "HALF",
            PixelFormat::Full => "FULL",
            PixelFormat::Real => "REAL",
            PixelFormat::Doub => "DOUB",
            PixelFormat::Comp => "COMP",
        }
    }

    /// Whether the pixel extractor can decode this format
    pub fn is_supported(&self) -> bool {
        matches!(self, PixelFormat::Byte | PixelFormat::Half)
    }

    /// Bits per sample of the written output image
    pub fn bit_depth(&self) -> u8 {
        (self.width() * 8) as u8
    }
}

impl FromStr for PixelFormat {
    type Err = VicarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BYTE" => Ok(PixelFormat::Byte),
            "HALF" | "WORD" => Ok(PixelFormat::Half),
            "FULL" | "LONG" => Ok(PixelFormat::Full),
            "REAL" => Ok(PixelFormat::Real),
            "DOUB" => Ok(PixelFormat::Doub),
            "COMP" | "COMPLEX" => Ok(PixelFormat::Comp),
            other => Err(VicarError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
