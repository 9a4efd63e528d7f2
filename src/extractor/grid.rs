//! Decoded pixel data

use crate::vicar::format::PixelFormat;

/// Rows of decoded samples, band-major
///
/// BYTE images keep their raw `u8` samples. HALF images hold the
/// rescaled floating-point values; they are neither clamped nor rounded.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelGrid {
    Byte(Vec<Vec<u8>>),
    Half(Vec<Vec<f64>>),
}

impl PixelGrid {
    /// Number of rows
    pub fn height(&self) -> usize {
        match self {
            PixelGrid::Byte(rows) => rows.len(),
            PixelGrid::Half(rows) => rows.len(),
        }
    }

    /// Number of samples per row (0 for an empty grid)
    pub fn width(&self) -> usize {
        match self {
            PixelGrid::Byte(rows) => rows.first().map_or(0, Vec::len),
            PixelGrid::Half(rows) => rows.first().map_or(0, Vec::len),
        }
    }

    /// Sample format of the grid
    pub fn format(&self) -> PixelFormat {
        match self {
            PixelGrid::Byte(_) => PixelFormat::Byte,
            PixelGrid::Half(_) => PixelFormat::Half,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }
}
