//! Tests for the label parser

extern crate std;

use std::io::Cursor;

use crate::vicar::errors::VicarError;
use crate::vicar::label::{self, normalize_key, parse, parse_from_reader};
use crate::vicar::value::LabelValue;
use super::test_utils::build_label;

fn string(s: &str) -> LabelValue {
    LabelValue::String(s.to_string())
}

#[test]
fn test_parse_mixed_value_kinds() {
    let raw = build_label(64, "KEY1=VAL1 KEY2='VAL 2' KEY3=(1,2,3) ");
    let label = parse(&raw).unwrap();

    std::assert_eq!(label.len(), 4);
    std::assert_eq!(label.get("LBLSIZE"), Some(&LabelValue::Integer(64)));
    std::assert_eq!(label.get("KEY1"), Some(&string("VAL1")));
    std::assert_eq!(label.get("KEY2"), Some(&string("VAL 2")));
    match label.get("KEY3") {
        Some(LabelValue::List { raw, items }) => {
            std::assert_eq!(raw, "(1,2,3)");
            std::assert_eq!(items.len(), 3);
            std::assert_eq!(items[2], LabelValue::Integer(3));
        }
        other => std::panic!("expected list, got {:?}", other),
    }
}

#[test]
fn test_entries_keep_label_order() {
    let raw = build_label(80, "FORMAT='BYTE' N1=10 N2=20 N3=1 ");
    let label = parse(&raw).unwrap();

    let keys: Vec<&str> = label.iter().map(|(k, _)| k).collect();
    std::assert_eq!(keys, std::vec!["LBLSIZE", "FORMAT", "N1", "N2", "N3"]);
}

#[test]
fn test_whitespace_between_tokens_is_irrelevant() {
    let tight = parse(&build_label(60, "A=1 B='X' C=(4,5) ")).unwrap();
    let loose = parse(&build_label(60, "   A=1      B='X'  C=(4,5)     ")).unwrap();

    std::assert_eq!(tight, loose);
}

#[test]
fn test_tabs_and_newlines_separate_tokens() {
    let label = parse(&build_label(40, "A=1\tB=2\nC=3 ")).unwrap();

    std::assert_eq!(label.get_integer("A"), Some(1));
    std::assert_eq!(label.get_integer("B"), Some(2));
    std::assert_eq!(label.get_integer("C"), Some(3));
}

#[test]
fn test_keys_are_uppercased() {
    let mut raw = build_label(40, "format='half' n1=7 ");
    raw[..8].copy_from_slice(b"lblsize=");
    let label = parse(&raw).unwrap();

    std::assert_eq!(label.get_integer("N1"), Some(7));
    std::assert_eq!(label.get_integer("n1"), Some(7));
    std::assert!(label.iter().all(|(k, _)| k == k.to_uppercase()));
    std::assert_eq!(label.get_str("FORMAT"), Some("half"));
}

#[test]
fn test_duplicate_key_last_wins() {
    let label = parse(&build_label(40, "N1=1 N2=5 N1=9 ")).unwrap();

    std::assert_eq!(label.get_integer("N1"), Some(9));
    std::assert_eq!(label.len(), 3);
}

#[test]
fn test_rejects_wrong_prefix() {
    let raw = b"XLBLSIZE=10 FORMAT='BYTE'  ".to_vec();

    std::assert!(std::matches!(parse(&raw), Err(VicarError::MalformedHeader(_))));
}

#[test]
fn test_rejects_non_numeric_size() {
    let raw = b"LBLSIZE=abc FORMAT='BYTE'  ".to_vec();

    std::assert!(std::matches!(parse(&raw), Err(VicarError::MalformedHeader(_))));
}

#[test]
fn test_rejects_label_longer_than_input() {
    let raw = b"LBLSIZE=500 N1=1 ".to_vec();

    std::assert!(std::matches!(parse(&raw), Err(VicarError::MalformedHeader(_))));
}

#[test]
fn test_rejects_zero_size() {
    let raw = b"LBLSIZE=0 ".to_vec();

    std::assert!(std::matches!(parse(&raw), Err(VicarError::MalformedHeader(_))));
}

#[test]
fn test_unterminated_token_is_dropped() {
    // exactly LBLSIZE bytes, the last token has no trailing separator
    let raw = b"LBLSIZE=22 N1=4 LAST=7".to_vec();
    std::assert_eq!(raw.len(), 22);
    let label = parse(&raw).unwrap();

    std::assert_eq!(label.get_integer("N1"), Some(4));
    std::assert!(!label.contains_key("LAST"));
}

#[test]
fn test_unterminated_quote_is_dropped() {
    let label = parse(&build_label(40, "N1=4 NAME='never closed ")).unwrap();

    std::assert_eq!(label.get_integer("N1"), Some(4));
    std::assert!(!label.contains_key("NAME"));
}

#[test]
fn test_nul_padding_ends_last_token() {
    let mut raw = b"LBLSIZE=32 N1=4 N2=2".to_vec();
    raw.resize(32, 0);
    let label = parse(&raw).unwrap();

    std::assert_eq!(label.get_integer("N2"), Some(2));
}

#[test]
fn test_quotes_inside_parens_are_literal() {
    let label = parse(&build_label(48, "K=('A B',C) N=1 ")).unwrap();

    match label.get("K") {
        Some(LabelValue::List { raw, items }) => {
            std::assert_eq!(raw, "('A B',C)");
            std::assert_eq!(items, &std::vec![string("A B"), string("C")]);
        }
        other => std::panic!("expected list, got {:?}", other),
    }
    std::assert_eq!(label.get_integer("N"), Some(1));
}

#[test]
fn test_parens_inside_quotes_are_literal() {
    let label = parse(&build_label(48, "NOTE='(not a list)' N=1 ")).unwrap();

    std::assert_eq!(label.get_str("NOTE"), Some("(not a list)"));
    std::assert_eq!(label.get_integer("N"), Some(1));
}

#[test]
fn test_doubled_quote_in_string() {
    let label = parse(&build_label(40, "NOTE='IT''S OK' ")).unwrap();

    std::assert_eq!(label.get_str("NOTE"), Some("IT'S OK"));
}

#[test]
fn test_value_splits_on_first_equals() {
    let label = parse(&build_label(40, "EXPR='A=B' ")).unwrap();

    std::assert_eq!(label.get_str("EXPR"), Some("A=B"));
}

#[test]
fn test_token_without_equals_is_skipped() {
    let label = parse(&build_label(40, "JUNK N1=3 ")).unwrap();

    std::assert!(!label.contains_key("JUNK"));
    std::assert_eq!(label.get_integer("N1"), Some(3));
}

#[test]
fn test_signed_and_real_values() {
    let label = parse(&build_label(60, "OFFSET=-12 SCALE=0.25 ")).unwrap();

    std::assert_eq!(label.get_integer("OFFSET"), Some(-12));
    std::assert_eq!(label.get("SCALE"), Some(&LabelValue::Real(0.25)));
}

#[test]
fn test_parse_from_reader_matches_slice_parse() {
    let mut raw = build_label(64, "FORMAT='BYTE' N1=2 N2=2 ");
    raw.extend_from_slice(&[1, 2, 3, 4]);
    let expected = parse(&raw).unwrap();

    let mut cursor = Cursor::new(raw);
    let label = parse_from_reader(&mut cursor).unwrap();

    std::assert_eq!(label, expected);
    std::assert_eq!(cursor.position(), 64);
}

#[test]
fn test_parse_from_reader_short_file() {
    let mut cursor = Cursor::new(b"LBLSIZE=200 N1=1 ".to_vec());

    std::assert!(std::matches!(
        parse_from_reader(&mut cursor),
        Err(VicarError::MalformedHeader(_))
    ));
}

#[test]
fn test_parse_from_reader_huge_label_size() {
    // far more bytes than the stream holds; must fail without allocating them
    let mut cursor = Cursor::new(b"LBLSIZE=99999999999999 N1=1 ".to_vec());

    match parse_from_reader(&mut cursor) {
        Err(VicarError::MalformedHeader(msg)) => std::assert!(msg.contains("only 28 are present")),
        other => std::panic!("expected MalformedHeader, got {:?}", other),
    }
}

#[test]
fn test_parse_from_reader_rejects_wrong_prefix() {
    let mut cursor = Cursor::new(b"NLBSIZE=20 N1=1     ".to_vec());

    std::assert!(std::matches!(
        parse_from_reader(&mut cursor),
        Err(VicarError::MalformedHeader(_))
    ));
}

#[test]
fn test_label_size_prefix() {
    std::assert_eq!(label::parse_label_size(b"LBLSIZE=1024 REST").unwrap(), 1024);
    std::assert!(label::parse_label_size(b"LBLSIZE=1024").is_err());
}

#[test]
fn test_normalize_key() {
    std::assert_eq!(normalize_key("  nbb "), "NBB");
}
