//! Greyscale PNG output
//!
//! BYTE grids are written as 8-bit greyscale, HALF grids as 16-bit
//! greyscale. The image is encoded in memory and written in one go; a
//! failed write removes whatever reached the disk.

use image::{ImageBuffer, ImageFormat, Luma};
use log::{debug, info, warn};
use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::extractor::PixelGrid;
use crate::vicar::errors::{VicarError, VicarResult};
use crate::vicar::metadata::Metadata;
use crate::vicar::validation;

/// How the output image height is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightPolicy {
    /// One image row per decoded record (`N2 * N3`)
    #[default]
    DecodedRows,
    /// `N1 * N3`, as computed by older VICAR converters; only valid when
    /// it agrees with the decoded row count
    Legacy,
}

/// Writes pixel grids as PNG files
pub struct PngWriter {
    height_policy: HeightPolicy,
}

impl PngWriter {
    pub fn new(height_policy: HeightPolicy) -> Self {
        PngWriter { height_policy }
    }

    /// Computes the output dimensions for a grid
    ///
    /// # Returns
    /// `(width, height)`, or an error if the geometry is empty, too large,
    /// or the legacy height disagrees with the decoded rows
    pub fn dimensions(&self, grid: &PixelGrid, metadata: &Metadata) -> VicarResult<(u32, u32)> {
        let width = validation::validate_dimension(metadata.n1, "width (N1)")?;
        let rows = grid.height() as u64;

        let height = match self.height_policy {
            HeightPolicy::DecodedRows => rows,
            HeightPolicy::Legacy => {
                let legacy = metadata.n1.saturating_mul(metadata.n3);
                if legacy != rows {
                    return Err(VicarError::GenericError(format!(
                        "legacy height N1*N3 = {} does not match {} decoded rows",
                        legacy, rows
                    )));
                }
                legacy
            }
        };
        let height = validation::validate_dimension(height, "height")?;

        Ok((width, height))
    }

    /// Encodes the grid as PNG bytes
    pub fn encode(&self, grid: &PixelGrid, metadata: &Metadata) -> VicarResult<Vec<u8>> {
        let (width, height) = self.dimensions(grid, metadata)?;
        debug!("Encoding {}x{} {}-bit greyscale PNG", width, height, grid.format().bit_depth());

        let mut encoded = Cursor::new(Vec::new());
        match grid {
            PixelGrid::Byte(rows) => {
                let data: Vec<u8> = rows.iter().flatten().copied().collect();
                let image = ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(width, height, data)
                    .ok_or_else(|| size_mismatch(width, height))?;
                image.write_to(&mut encoded, ImageFormat::Png)?;
            }
            PixelGrid::Half(rows) => {
                let data: Vec<u16> = rows.iter().flatten().map(|&v| to_u16_sample(v)).collect();
                let image = ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(width, height, data)
                    .ok_or_else(|| size_mismatch(width, height))?;
                image.write_to(&mut encoded, ImageFormat::Png)?;
            }
        }

        Ok(encoded.into_inner())
    }

    /// Encodes the grid and writes it to `output_path`
    ///
    /// # Returns
    /// The written `(width, height)`
    pub fn write(&self, grid: &PixelGrid, metadata: &Metadata, output_path: &str) -> VicarResult<(u32, u32)> {
        let dimensions = self.dimensions(grid, metadata)?;
        let bytes = self.encode(grid, metadata)?;

        if let Err(e) = fs::write(Path::new(output_path), &bytes) {
            if Path::new(output_path).exists() {
                warn!("Removing incomplete output file {}", output_path);
                let _ = fs::remove_file(output_path);
            }
            return Err(VicarError::IoError(std::io::Error::new(
                e.kind(),
                format!("cannot write {}: {}", output_path, e),
            )));
        }

        info!("Wrote {}x{} PNG to {}", dimensions.0, dimensions.1, output_path);
        Ok(dimensions)
    }
}

/// Rounds a rescaled HALF sample and clamps it into the 16-bit range
pub fn to_u16_sample(value: f64) -> u16 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, u16::MAX as f64) as u16
}

fn size_mismatch(width: u32, height: u32) -> VicarError {
    VicarError::GenericError(format!(
        "pixel data does not fill a {}x{} image",
        width, height
    ))
}
