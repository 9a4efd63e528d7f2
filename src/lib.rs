pub mod io;
pub mod vicar;
pub mod utils;
pub mod extractor;
pub mod output;
pub mod converter;
pub mod commands;
pub mod api;

pub use crate::api::VicarKit;

pub use vicar::{Label, LabelValue, Metadata, PixelFormat, VicarError, VicarReader, VicarResult};
pub use extractor::{PixelExtractor, PixelGrid};
pub use converter::{ConversionOptions, ConversionSummary, VicarConverter};
