//! Typed view over a parsed label
//!
//! The extractor needs a handful of geometry keywords. They are pulled
//! out of the label once and checked up front, so a missing or mistyped
//! field is reported before any pixel data is touched.

use log::debug;
use std::fmt;

use crate::io::byte_order::ByteOrder;
use crate::vicar::constants::{intfmt, keys};
use crate::vicar::errors::{VicarError, VicarResult};
use crate::vicar::format::PixelFormat;
use crate::vicar::label::Label;

/// Geometry and format of a VICAR image
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// Label size in bytes
    pub lblsize: u64,
    /// Number of binary header records
    pub nlb: u64,
    /// Bytes per record
    pub recsize: u64,
    /// Samples per line
    pub n1: u64,
    /// Lines per band
    pub n2: u64,
    /// Number of bands
    pub n3: u64,
    /// Binary prefix bytes per record
    pub nbb: u64,
    /// Sample format
    pub format: PixelFormat,
    /// Integer byte order of the binary data
    pub byte_order: ByteOrder,
    /// Full label for keywords without a named field
    pub label: Label,
}

impl Metadata {
    /// Builds the typed view, validating every required keyword
    ///
    /// # Returns
    /// `MissingField` for an absent or non-integer geometry keyword or an
    /// absent FORMAT, `UnsupportedFormat` for a FORMAT name that is not a
    /// VICAR format at all
    pub fn from_label(label: Label) -> VicarResult<Self> {
        let format_name = label
            .get_str(keys::FORMAT)
            .ok_or_else(|| VicarError::MissingField(keys::FORMAT.to_string()))?;
        let format = format_name.parse::<PixelFormat>()?;

        let byte_order = match label.get_str(keys::INTFMT) {
            None => ByteOrder::BigEndian,
            Some(value) if value.eq_ignore_ascii_case(intfmt::HIGH) => ByteOrder::BigEndian,
            Some(value) if value.eq_ignore_ascii_case(intfmt::LOW) => ByteOrder::LittleEndian,
            Some(other) => {
                return Err(VicarError::MissingField(format!(
                    "{} (unknown value {})",
                    keys::INTFMT,
                    other
                )))
            }
        };

        let metadata = Metadata {
            lblsize: required_size(&label, keys::LBLSIZE)?,
            nlb: required_size(&label, keys::NLB)?,
            recsize: required_size(&label, keys::RECSIZE)?,
            n1: required_size(&label, keys::N1)?,
            n2: required_size(&label, keys::N2)?,
            n3: required_size(&label, keys::N3)?,
            nbb: required_size(&label, keys::NBB)?,
            format,
            byte_order,
            label,
        };

        debug!(
            "Metadata: {}x{}x{} {} (NLB={}, RECSIZE={}, NBB={})",
            metadata.n1, metadata.n2, metadata.n3, metadata.format,
            metadata.nlb, metadata.recsize, metadata.nbb
        );
        Ok(metadata)
    }

    /// Byte offset of the first pixel record
    pub fn data_offset(&self) -> u64 {
        self.lblsize.saturating_add(self.nlb.saturating_mul(self.recsize))
    }

    /// Number of pixel records (rows over all bands)
    pub fn record_count(&self) -> u64 {
        self.n2.saturating_mul(self.n3)
    }

    /// Bytes of pixel payload per record
    pub fn row_bytes(&self) -> u64 {
        self.n1.saturating_mul(self.format.width() as u64)
    }

    /// Bytes needed from the data offset to the end of the last record
    pub fn data_size(&self) -> u64 {
        self.record_count()
            .saturating_mul(self.nbb.saturating_add(self.row_bytes()))
    }

    /// Total file length the geometry requires
    ///
    /// Arithmetic saturates, so absurd geometry reads as an unsatisfiable length
    pub fn required_length(&self) -> u64 {
        self.data_offset().saturating_add(self.data_size())
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image geometry:")?;
        writeln!(f, "  Format: {} ({} bytes/sample)", self.format, self.format.width())?;
        writeln!(f, "  Byte order: {}", self.byte_order.name())?;
        writeln!(f, "  Samples per line (N1): {}", self.n1)?;
        writeln!(f, "  Lines per band (N2): {}", self.n2)?;
        writeln!(f, "  Bands (N3): {}", self.n3)?;
        writeln!(f, "  Binary prefix per record (NBB): {}", self.nbb)?;
        writeln!(f, "  Binary header: {} records of {} bytes", self.nlb, self.recsize)?;
        writeln!(f, "  Pixel data offset: {}", self.data_offset())?;
        writeln!(f, "  Pixel data size: {}", self.data_size())
    }
}

/// Reads a required non-negative integer keyword
fn required_size(label: &Label, key: &str) -> VicarResult<u64> {
    label
        .get_integer(key)
        .and_then(|v| u64::try_from(v).ok())
        .ok_or_else(|| VicarError::MissingField(key.to_string()))
}
