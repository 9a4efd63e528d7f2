//! Raster output for decoded images

mod png_writer;

pub use png_writer::{to_u16_sample, HeightPolicy, PngWriter};
