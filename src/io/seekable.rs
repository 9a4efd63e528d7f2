//! Seekable reader trait
//!
//! The label parser rewinds after reading the `LBLSIZE` prefix and the
//! pixel extractor jumps past the binary header, so both work against
//! readers that can seek.

use std::io::{Read, Seek};

/// Trait for readers that can both read and seek
pub trait SeekableReader: Read + Seek + Send + Sync {}

impl<T: Read + Seek + Send + Sync> SeekableReader for T {}
