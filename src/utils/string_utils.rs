//! String utility functions
//!
//! Utilities for working with label text and file names.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Decodes label bytes as text; non-UTF-8 bytes become replacement characters
pub fn label_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Characters that separate bare label tokens
pub fn is_label_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\0')
}

/// Derives the default output path for an input file
///
/// The last two dot-separated extension components of the file name are
/// removed and `.png` is appended, so `frame.IMG.gz` becomes `frame.png`
/// and `frame.IMG` becomes `frame.png`. The directory part is kept.
pub fn default_output_path(input: &str) -> String {
    let path = Path::new(input);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string());

    let mut stem = file_name.as_str();
    for _ in 0..2 {
        match stem.rfind('.') {
            Some(pos) if pos > 0 => stem = &stem[..pos],
            _ => break,
        }
    }

    let output_name = format!("{}.png", stem);
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            PathBuf::from(parent).join(output_name).to_string_lossy().into_owned()
        }
        _ => output_name,
    }
}
