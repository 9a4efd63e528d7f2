//! Byte order handling for VICAR binary data
//!
//! This module implements the Strategy pattern for handling different
//! integer byte orders (INTFMT=HIGH vs INTFMT=LOW) when decoding samples.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{Read, Result};

/// Integer byte order of a VICAR file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (INTFMT=LOW)
    LittleEndian,
    /// Big-endian byte order (INTFMT=HIGH)
    BigEndian,
}

impl ByteOrder {
    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (LOW)",
            ByteOrder::BigEndian => "Big Endian (HIGH)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler: Send + Sync {
    /// Fill `dst` with consecutive i16 values
    fn read_i16_into(&self, reader: &mut dyn Read, dst: &mut [i16]) -> Result<()>;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_i16_into(&self, reader: &mut dyn Read, dst: &mut [i16]) -> Result<()> {
        reader.read_i16_into::<LittleEndian>(dst)
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_i16_into(&self, reader: &mut dyn Read, dst: &mut [i16]) -> Result<()> {
        reader.read_i16_into::<BigEndian>(dst)
    }
}
