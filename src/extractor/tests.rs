//! Tests for pixel extraction

extern crate std;

use std::io::Cursor;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::vicar::errors::VicarError;
use crate::vicar::label::parse_from_reader;
use crate::vicar::metadata::Metadata;
use crate::vicar::tests::test_utils::{simple_fields, vicar_cursor};
use super::{extract, PixelExtractor, PixelGrid};

fn metadata_of(cursor: &mut Cursor<Vec<u8>>) -> Metadata {
    Metadata::from_label(parse_from_reader(cursor).unwrap()).unwrap()
}

#[test]
fn test_extract_byte_rows() {
    let data = [0u8, 255, 128, 1, 10, 20, 30, 40];
    let mut cursor = vicar_cursor(96, &simple_fields("BYTE", 4, 2, 1), &data);
    let metadata = metadata_of(&mut cursor);

    let grid = extract(&metadata, &mut cursor).unwrap();

    std::assert_eq!(grid, PixelGrid::Byte(std::vec![
        std::vec![0, 255, 128, 1],
        std::vec![10, 20, 30, 40],
    ]));
    std::assert_eq!((grid.width(), grid.height()), (4, 2));
}

#[test]
fn test_extract_half_rescales() {
    let mut data: Vec<u8> = Vec::new();
    data.write_i16::<BigEndian>(0x1000).unwrap();
    data.write_i16::<BigEndian>(0).unwrap();
    data.write_i16::<BigEndian>(1).unwrap();
    data.write_i16::<BigEndian>(-1).unwrap();
    let mut cursor = vicar_cursor(96, &simple_fields("HALF", 2, 2, 1), &data);
    let metadata = metadata_of(&mut cursor);

    let grid = extract(&metadata, &mut cursor).unwrap();

    std::assert_eq!(grid, PixelGrid::Half(std::vec![
        std::vec![65536.0, 0.0],
        std::vec![16.0, -16.0],
    ]));
}

#[test]
fn test_extract_half_little_endian() {
    let mut data: Vec<u8> = Vec::new();
    data.write_i16::<LittleEndian>(2).unwrap();
    let fields = std::format!("{}INTFMT='LOW' ", simple_fields("HALF", 1, 1, 1));
    let mut cursor = vicar_cursor(128, &fields, &data);
    let metadata = metadata_of(&mut cursor);

    let grid = extract(&metadata, &mut cursor).unwrap();

    std::assert_eq!(grid, PixelGrid::Half(std::vec![std::vec![32.0]]));
}

#[test]
fn test_skips_binary_header_and_prefixes() {
    let fields = "FORMAT='BYTE' RECSIZE=5 NLB=2 NBB=2 N1=3 N2=2 N3=1 ";
    let mut data = std::vec![0xEEu8; 10];      // two header records
    data.extend_from_slice(&[0xAA, 0xAA, 1, 2, 3]);
    data.extend_from_slice(&[0xBB, 0xBB, 4, 5, 6]);
    let mut cursor = vicar_cursor(80, fields, &data);
    let metadata = metadata_of(&mut cursor);

    let grid = extract(&metadata, &mut cursor).unwrap();

    std::assert_eq!(grid, PixelGrid::Byte(std::vec![std::vec![1, 2, 3], std::vec![4, 5, 6]]));
}

#[test]
fn test_bands_follow_each_other() {
    let data = [1u8, 2, 3, 4, 5, 6];
    let mut cursor = vicar_cursor(96, &simple_fields("BYTE", 1, 3, 2), &data);
    let metadata = metadata_of(&mut cursor);

    let grid = extract(&metadata, &mut cursor).unwrap();

    std::assert_eq!(grid.height(), 6);
    std::assert_eq!(grid, PixelGrid::Byte((1..=6).map(|v| std::vec![v]).collect()));
}

#[test]
fn test_trailing_bytes_are_ignored() {
    let data = [9u8, 8, 7, 6, 0xFF, 0xFF];
    let mut cursor = vicar_cursor(96, &simple_fields("BYTE", 2, 2, 1), &data);
    let metadata = metadata_of(&mut cursor);

    let grid = extract(&metadata, &mut cursor).unwrap();

    std::assert_eq!(grid, PixelGrid::Byte(std::vec![std::vec![9, 8], std::vec![7, 6]]));
}

#[test]
fn test_truncated_stream() {
    let data = [1u8, 2, 3, 4, 5, 6, 7];
    let mut cursor = vicar_cursor(96, &simple_fields("BYTE", 4, 2, 1), &data);
    let metadata = metadata_of(&mut cursor);

    match extract(&metadata, &mut cursor) {
        Err(VicarError::TruncatedStream { expected, available }) => {
            std::assert_eq!(expected, 96 + 8);
            std::assert_eq!(available, 96 + 7);
        }
        other => std::panic!("expected TruncatedStream, got {:?}", other),
    }
}

#[test]
fn test_truncated_binary_header() {
    let fields = "FORMAT='BYTE' RECSIZE=100 NLB=1 NBB=0 N1=1 N2=1 N3=1 ";
    let mut cursor = vicar_cursor(80, fields, &[0u8; 50]);
    let metadata = metadata_of(&mut cursor);

    std::assert!(std::matches!(
        extract(&metadata, &mut cursor),
        Err(VicarError::TruncatedStream { .. })
    ));
}

#[test]
fn test_unsupported_format_before_reading() {
    // no pixel bytes at all: the format check must come first
    let mut cursor = vicar_cursor(96, &simple_fields("FULL", 4, 2, 1), &[]);
    let metadata = metadata_of(&mut cursor);

    match extract(&metadata, &mut cursor) {
        Err(VicarError::UnsupportedFormat(name)) => std::assert_eq!(name, "FULL"),
        other => std::panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_zero_width_geometry_is_rejected() {
    // records without pixel bytes would pass any stream-length check
    let fields = "FORMAT='BYTE' RECSIZE=0 NLB=0 NBB=0 N1=0 N2=100000000000 N3=1 ";
    let mut cursor = vicar_cursor(96, fields, &[]);
    let metadata = metadata_of(&mut cursor);

    match extract(&metadata, &mut cursor) {
        Err(VicarError::GenericError(msg)) => std::assert!(msg.contains("N1")),
        other => std::panic!("expected GenericError, got {:?}", other),
    }
}

#[test]
fn test_zero_line_geometry_is_rejected() {
    let mut cursor = vicar_cursor(96, &simple_fields("HALF", 2, 0, 1), &[]);
    let metadata = metadata_of(&mut cursor);

    std::assert!(std::matches!(
        extract(&metadata, &mut cursor),
        Err(VicarError::GenericError(_))
    ));
}

#[test]
fn test_extractor_with_progress_disabled() {
    let mut cursor = vicar_cursor(96, &simple_fields("BYTE", 2, 1, 1), &[3, 4]);
    let metadata = metadata_of(&mut cursor);

    let grid = PixelExtractor::new().with_progress(false).extract(&metadata, &mut cursor).unwrap();

    std::assert_eq!(grid.format(), crate::vicar::format::PixelFormat::Byte);
    std::assert_eq!(grid, PixelGrid::Byte(std::vec![std::vec![3, 4]]));
}
