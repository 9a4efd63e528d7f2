//! Typed label values
//!
//! A label token's right-hand side is kept as raw text by the tokenizer
//! and typed here: integers, reals, strings, and parenthesized lists.

use std::fmt;

/// The value half of a `KEY=VALUE` label entry
#[derive(Debug, Clone, PartialEq)]
pub enum LabelValue {
    /// Signed integer
    Integer(i64),
    /// Real number
    Real(f64),
    /// Quoted or bare string
    String(String),
    /// Parenthesized list, raw text including the parens plus its elements
    List { raw: String, items: Vec<LabelValue> },
}

impl LabelValue {
    /// Types the raw text of a label value
    ///
    /// Quoted text always stays a string. Parenthesized text becomes a list.
    /// Otherwise digits (with an optional sign) are integers, decimal or
    /// exponent forms are reals, and anything else is a bare string.
    pub fn from_raw(raw: &str) -> Self {
        let text = raw.trim();

        if text.starts_with('(') {
            let inner = text.trim_start_matches('(');
            let inner = inner.strip_suffix(')').unwrap_or(inner);
            let items = if inner.trim().is_empty() {
                Vec::new()
            } else {
                inner.split(',').map(Self::scalar).collect()
            };
            return LabelValue::List { raw: text.to_string(), items };
        }

        Self::scalar(text)
    }

    /// Types a single scalar token
    fn scalar(token: &str) -> Self {
        let token = token.trim();

        if token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'') {
            let inner = &token[1..token.len() - 1];
            return LabelValue::String(inner.replace("''", "'"));
        }

        if is_integer(token) {
            if let Ok(value) = token.parse::<i64>() {
                return LabelValue::Integer(value);
            }
        }

        if is_real(token) {
            if let Ok(value) = token.replace(['D', 'd'], "E").parse::<f64>() {
                return LabelValue::Real(value);
            }
        }

        LabelValue::String(token.to_string())
    }

    /// Returns the value as an integer, if it is one
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LabelValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a string slice, if it is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LabelValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list elements, if the value is a list
    pub fn as_list(&self) -> Option<&[LabelValue]> {
        match self {
            LabelValue::List { items, .. } => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::Integer(v) => write!(f, "{}", v),
            LabelValue::Real(v) => write!(f, "{}", v),
            LabelValue::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            LabelValue::List { raw, .. } => write!(f, "{}", raw),
        }
    }
}

/// Digits with an optional leading sign
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Decimal or exponent notation, e.g. `1.5`, `-2.`, `.5`, `3E-4`
fn is_real(token: &str) -> bool {
    let body = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    let (mantissa, exponent) = match body.find(|c: char| matches!(c, 'E' | 'e' | 'D' | 'd')) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let mut seen_digit = false;
    let mut seen_point = false;
    for b in mantissa.bytes() {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    if !seen_digit {
        return false;
    }

    match exponent {
        Some(exp) => is_integer(exp),
        None => seen_point,
    }
}
