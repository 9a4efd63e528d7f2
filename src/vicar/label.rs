//! VICAR label parsing
//!
//! A VICAR file starts with `LBLSIZE=<n> ` followed by space separated
//! `KEY=VALUE` pairs, all inside the first `n` bytes. Values are bare
//! words, single-quoted strings, or parenthesized lists.

use log::{debug, info, warn};
use std::collections::HashMap;
use std::io::{Read, SeekFrom};

use crate::io::seekable::SeekableReader;
use crate::utils::string_utils;
use crate::vicar::constants::{header, keys};
use crate::vicar::errors::{VicarError, VicarResult};
use crate::vicar::value::LabelValue;

/// Ordered set of label entries with unique, upper-cased keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Label {
    /// Entries in first-insertion order
    entries: Vec<(String, LabelValue)>,
    /// Key to position in `entries`
    index: HashMap<String, usize>,
}

impl Label {
    /// Inserts an entry; a repeated key overwrites the earlier value in place
    pub fn insert(&mut self, key: &str, value: LabelValue) {
        let key = normalize_key(key);
        match self.index.get(&key) {
            Some(&pos) => {
                debug!("Label key {} repeated, keeping last value", key);
                self.entries[pos].1 = value;
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Looks up a value by key, case-insensitively
    pub fn get(&self, key: &str) -> Option<&LabelValue> {
        self.index
            .get(&normalize_key(key))
            .map(|&pos| &self.entries[pos].1)
    }

    /// Looks up an integer value
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(LabelValue::as_integer)
    }

    /// Looks up a string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(LabelValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(&normalize_key(key))
    }

    /// Iterates over entries in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabelValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the label size recorded in the label itself
    pub fn label_size(&self) -> Option<i64> {
        self.get_integer(keys::LBLSIZE)
    }
}

/// Upper-cases and trims a label key
pub fn normalize_key(key: &str) -> String {
    key.trim().to_uppercase()
}

/// Parses a label from the start of an in-memory file image
///
/// # Arguments
/// * `raw` - File bytes, at least the whole label
///
/// # Returns
/// The parsed label, or `MalformedHeader` if the `LBLSIZE=` prefix is
/// missing, non-numeric, or announces more bytes than `raw` holds
pub fn parse(raw: &[u8]) -> VicarResult<Label> {
    let label_size = parse_label_size(raw)?;
    if raw.len() < label_size {
        return Err(VicarError::MalformedHeader(format!(
            "label announces {} bytes but only {} are present",
            label_size,
            raw.len()
        )));
    }

    let label = tokenize(&raw[..label_size]);
    info!("Parsed VICAR label: {} bytes, {} entries", label_size, label.len());
    Ok(label)
}

/// Parses a label from a seekable stream
///
/// The prefix is read byte by byte, then the stream is rewound and the
/// first `LBLSIZE` bytes are read as label text. The buffer only grows as
/// bytes arrive, so a size larger than the stream is `MalformedHeader`.
/// On return the stream is positioned just past the label.
pub fn parse_from_reader(reader: &mut dyn SeekableReader) -> VicarResult<Label> {
    reader.seek(SeekFrom::Start(0))?;

    let mut prefix = vec![0u8; header::LBLSIZE_PREFIX.len()];
    read_header_bytes(reader, &mut prefix)?;
    check_prefix(&prefix)?;

    let mut digits = Vec::new();
    loop {
        let mut byte = [0u8; 1];
        read_header_bytes(reader, &mut byte)?;
        if byte[0] == b' ' {
            break;
        }
        digits.push(byte[0]);
        if digits.len() > header::MAX_LBLSIZE_DIGITS {
            return Err(VicarError::MalformedHeader("LBLSIZE value is not terminated".to_string()));
        }
    }
    let label_size = size_from_digits(&digits)?;

    reader.seek(SeekFrom::Start(0))?;
    let mut buffer = Vec::new();
    Read::take(&mut *reader, label_size as u64).read_to_end(&mut buffer)?;
    if buffer.len() < label_size {
        return Err(VicarError::MalformedHeader(format!(
            "label announces {} bytes but only {} are present",
            label_size,
            buffer.len()
        )));
    }

    let label = tokenize(&buffer);
    info!("Parsed VICAR label: {} bytes, {} entries", label_size, label.len());
    Ok(label)
}

/// Reads the `LBLSIZE=<digits> ` prefix from a byte slice
pub fn parse_label_size(raw: &[u8]) -> VicarResult<usize> {
    let prefix_len = header::LBLSIZE_PREFIX.len();
    if raw.len() < prefix_len {
        return Err(VicarError::MalformedHeader("file too short for LBLSIZE".to_string()));
    }
    check_prefix(&raw[..prefix_len])?;

    let rest = &raw[prefix_len..];
    let end = rest
        .iter()
        .take(header::MAX_LBLSIZE_DIGITS + 1)
        .position(|&b| b == b' ')
        .ok_or_else(|| VicarError::MalformedHeader("LBLSIZE value is not terminated".to_string()))?;

    size_from_digits(&rest[..end])
}

fn check_prefix(prefix: &[u8]) -> VicarResult<()> {
    if !prefix.eq_ignore_ascii_case(header::LBLSIZE_PREFIX) {
        return Err(VicarError::MalformedHeader(format!(
            "expected LBLSIZE=, found {:?}",
            String::from_utf8_lossy(prefix)
        )));
    }
    Ok(())
}

fn size_from_digits(digits: &[u8]) -> VicarResult<usize> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(VicarError::MalformedHeader(format!(
            "LBLSIZE is not an integer: {:?}",
            String::from_utf8_lossy(digits)
        )));
    }

    let text = String::from_utf8_lossy(digits);
    let size = text
        .parse::<usize>()
        .map_err(|e| VicarError::MalformedHeader(format!("LBLSIZE out of range: {}", e)))?;

    if size == 0 {
        return Err(VicarError::MalformedHeader("LBLSIZE is zero".to_string()));
    }

    debug!("LBLSIZE: {}", size);
    Ok(size)
}

/// Fills `buf` from the header region; a short read means a malformed header
fn read_header_bytes(reader: &mut dyn SeekableReader, buf: &mut [u8]) -> VicarResult<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => {
            VicarError::MalformedHeader("file ends inside the label".to_string())
        }
        _ => VicarError::IoError(e),
    })
}

/// Tokenizer state while scanning label text
#[derive(Debug, Default)]
struct Tokenizer {
    buffer: String,
    in_quote: bool,
    in_parens: bool,
    label: Label,
}

impl Tokenizer {
    /// Splits the current token on its first `=` and stores it
    fn commit(&mut self) {
        let token = std::mem::take(&mut self.buffer);
        self.in_quote = false;
        self.in_parens = false;

        match token.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                self.label.insert(key, LabelValue::from_raw(value));
            }
            _ => debug!("Discarding label token without key: {:?}", token),
        }
    }
}

/// Scans label text into key/value entries
///
/// Quotes toggle string state except inside a parenthesized list, where
/// they are plain characters. A closing `)` or `'` ends its token; outside
/// both, whitespace ends a bare token. A token still open at the end of
/// the text is dropped.
pub fn tokenize(text: &[u8]) -> Label {
    let text = string_utils::label_text(text);
    let mut state = Tokenizer::default();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' if !state.in_parens => {
                if !state.in_quote {
                    state.in_quote = true;
                    state.buffer.push(c);
                } else if chars.peek() == Some(&'\'') {
                    // doubled quote is a literal quote
                    state.buffer.push(c);
                    state.buffer.push('\'');
                    chars.next();
                } else {
                    state.buffer.push(c);
                    state.commit();
                }
            }
            '(' if !state.in_quote => {
                state.in_parens = true;
                state.buffer.push(c);
            }
            ')' if state.in_parens && !state.in_quote => {
                state.buffer.push(c);
                state.commit();
            }
            c if string_utils::is_label_separator(c) && !state.in_quote && !state.in_parens => {
                if !state.buffer.is_empty() {
                    state.commit();
                }
            }
            c => state.buffer.push(c),
        }
    }

    if !state.buffer.is_empty() {
        warn!("Discarding unterminated label token: {:?}", state.buffer);
    }

    state.label
}
