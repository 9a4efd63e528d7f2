//! Sample decoding strategies
//!
//! Each supported FORMAT has a decoder that turns one record's pixel
//! payload into a row of the grid.

use std::io::{self, Read};

use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::vicar::constants::half_scale;
use crate::vicar::errors::{VicarError, VicarResult};
use crate::vicar::format::PixelFormat;

use super::grid::PixelGrid;

/// Strategy trait for decoding one row of samples
pub trait SampleDecoder: Send + Sync {
    /// Reads `samples` values and appends them to `grid` as a new row
    fn read_row(&self, reader: &mut dyn Read, samples: usize, grid: &mut PixelGrid) -> io::Result<()>;

    /// Creates an empty grid of this decoder's format, sized for `rows`
    fn empty_grid(&self, rows: usize) -> PixelGrid;

    /// Get the format this decoder handles
    fn format(&self) -> PixelFormat;
}

/// Unsigned 8-bit samples, copied as-is
pub struct ByteDecoder;

impl SampleDecoder for ByteDecoder {
    fn read_row(&self, reader: &mut dyn Read, samples: usize, grid: &mut PixelGrid) -> io::Result<()> {
        let mut row = vec![0u8; samples];
        reader.read_exact(&mut row)?;
        match grid {
            PixelGrid::Byte(rows) => rows.push(row),
            PixelGrid::Half(_) => return Err(grid_mismatch()),
        }
        Ok(())
    }

    fn empty_grid(&self, rows: usize) -> PixelGrid {
        PixelGrid::Byte(Vec::with_capacity(rows))
    }

    fn format(&self) -> PixelFormat {
        PixelFormat::Byte
    }
}

/// Signed 16-bit samples, rescaled by `65536 / 4096`
pub struct HalfDecoder {
    handler: Box<dyn ByteOrderHandler>,
}

impl HalfDecoder {
    pub fn new(byte_order: ByteOrder) -> Self {
        HalfDecoder { handler: byte_order.create_handler() }
    }

    /// Maps a raw HALF value onto the output intensity scale
    pub fn rescale(value: i16) -> f64 {
        value as f64 * half_scale::NUMERATOR / half_scale::DENOMINATOR
    }
}

impl SampleDecoder for HalfDecoder {
    fn read_row(&self, reader: &mut dyn Read, samples: usize, grid: &mut PixelGrid) -> io::Result<()> {
        let mut raw = vec![0i16; samples];
        self.handler.read_i16_into(reader, &mut raw)?;
        let row: Vec<f64> = raw.into_iter().map(Self::rescale).collect();
        match grid {
            PixelGrid::Half(rows) => rows.push(row),
            PixelGrid::Byte(_) => return Err(grid_mismatch()),
        }
        Ok(())
    }

    fn empty_grid(&self, rows: usize) -> PixelGrid {
        PixelGrid::Half(Vec::with_capacity(rows))
    }

    fn format(&self) -> PixelFormat {
        PixelFormat::Half
    }
}

fn grid_mismatch() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, "decoder does not match grid format")
}

/// Factory for creating sample decoders
pub struct DecoderFactory;

impl DecoderFactory {
    /// Create a decoder for the given format
    pub fn create_decoder(format: PixelFormat, byte_order: ByteOrder) -> VicarResult<Box<dyn SampleDecoder>> {
        match format {
            PixelFormat::Byte => Ok(Box::new(ByteDecoder)),
            PixelFormat::Half => Ok(Box::new(HalfDecoder::new(byte_order))),
            other => Err(VicarError::UnsupportedFormat(other.name().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_half_rescale() {
        assert_eq!(HalfDecoder::rescale(0), 0.0);
        assert_eq!(HalfDecoder::rescale(1), 16.0);
        assert_eq!(HalfDecoder::rescale(0x1000), 65536.0);
        assert_eq!(HalfDecoder::rescale(-2), -32.0);
    }

    #[test]
    fn test_half_decoder_big_endian() {
        let decoder = HalfDecoder::new(ByteOrder::BigEndian);
        let mut grid = PixelGrid::Half(Vec::new());
        let mut cursor = Cursor::new(vec![0x00u8, 0x01, 0xFF, 0xFF]);

        decoder.read_row(&mut cursor, 2, &mut grid).unwrap();
        assert_eq!(grid, PixelGrid::Half(vec![vec![16.0, -16.0]]));
    }

    #[test]
    fn test_half_decoder_little_endian() {
        let decoder = HalfDecoder::new(ByteOrder::LittleEndian);
        let mut grid = PixelGrid::Half(Vec::new());
        let mut cursor = Cursor::new(vec![0x01u8, 0x00]);

        decoder.read_row(&mut cursor, 1, &mut grid).unwrap();
        assert_eq!(grid, PixelGrid::Half(vec![vec![16.0]]));
    }

    #[test]
    fn test_short_row_is_eof() {
        let mut grid = PixelGrid::Byte(Vec::new());
        let mut cursor = Cursor::new(vec![1u8, 2]);

        let err = ByteDecoder.read_row(&mut cursor, 3, &mut grid).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_factory_rejects_full() {
        assert!(DecoderFactory::create_decoder(PixelFormat::Full, ByteOrder::BigEndian).is_err());
        let decoder = DecoderFactory::create_decoder(PixelFormat::Half, ByteOrder::BigEndian).unwrap();
        assert_eq!(decoder.format(), PixelFormat::Half);
    }

    #[test]
    fn test_empty_grid_matches_decoder() {
        assert_eq!(ByteDecoder.empty_grid(4), PixelGrid::Byte(Vec::new()));
        let half = HalfDecoder::new(ByteOrder::LittleEndian);
        assert_eq!(half.empty_grid(4).format(), PixelFormat::Half);
        assert!(half.empty_grid(4).is_empty());
    }
}
