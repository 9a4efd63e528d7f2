//! VICAR file format parsing module
//!
//! This module provides structures and functions for reading the label
//! and geometry of VICAR planetary image files.

pub mod errors;
pub mod label;
pub mod value;
pub mod metadata;
pub mod format;
pub mod reader;
pub mod keywords;
pub(crate) mod constants;
pub(crate) mod validation;
#[cfg(test)]
pub(crate) mod tests;

pub use errors::{VicarError, VicarResult};
pub use label::{parse, parse_from_reader, Label};
pub use value::LabelValue;
pub use metadata::Metadata;
pub use format::PixelFormat;
pub use reader::VicarReader;
