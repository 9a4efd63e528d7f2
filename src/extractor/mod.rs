//! Pixel extraction from VICAR files
//!
//! This module decodes the binary records that follow the label, using a
//! decoder strategy per sample format.

mod decoder;
mod grid;
mod pixel_extractor;

// Public exports
pub use decoder::{ByteDecoder, DecoderFactory, HalfDecoder, SampleDecoder};
pub use grid::PixelGrid;
pub use pixel_extractor::{extract, PixelExtractor};

#[cfg(test)]
mod tests;
