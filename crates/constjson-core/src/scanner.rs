//! Span finding over raw document text.
//!
//! The scanner never builds values. Each routine looks at the start of a
//! [`Text`] and reports where one value (or one object key) ends and where the
//! unconsumed remainder begins, so the tree builder can split the text into
//! "current" and "rest" without a separate tokenizer pass.
//!
//! # Boundary rules
//!
//! - Commas and stop characters inside a quoted string or inside a nested
//!   container never end the outer scan. Only a comma or the stop character
//!   at the top depth does.
//! - The stop character is `}` while scanning object values and `]` while
//!   scanning array elements.
//! - A quoted string ends at the first `"` not escaped by a backslash.
//!   Escapes are skipped over, never decoded.
//! - Malformed input (unterminated strings, unbalanced brackets, keys with no
//!   `:`) is reported as [`JsonError::MalformedSpan`] instead of producing a
//!   degenerate span.

use crate::error::{JsonError, Result};
use crate::text::Text;

/// Stop character for values inside an object body.
pub const OBJECT_STOP: u8 = b'}';

/// Stop character for elements inside an array body.
pub const ARRAY_STOP: u8 = b']';

/// The result of one scan: the value occupies `start..end` and the remaining
/// text begins at `rest`. All offsets are relative to the scanned text.
///
/// For quoted strings and keys the span excludes the quotes. For containers it
/// includes the opening and closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub rest: usize,
}

impl Span {
    /// The value's own text within `text`.
    pub fn value<'a>(&self, text: Text<'a>) -> Text<'a> {
        text.slice(self.start, self.end)
    }

    /// Everything after the delimiter that ended the value.
    pub fn rest<'a>(&self, text: Text<'a>) -> Text<'a> {
        text.substr(self.rest, None)
    }
}

/// Space, newline, carriage return or tab.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\n' | b'\r' | b'\t')
}

/// The suffix of `text` starting at its first non-whitespace character.
/// Returns the empty text when there is none.
pub fn skip_whitespace(text: Text<'_>) -> Text<'_> {
    let offset = text
        .as_bytes()
        .iter()
        .position(|&b| !is_whitespace(b))
        .unwrap_or(text.len());
    text.substr(offset, None)
}

/// Find the span of the single value at the start of `text`.
///
/// `text` must already start at the value (see [`skip_whitespace`]). The
/// first character decides how the value is delimited:
///
/// - `"`: up to the closing quote, then on to the next `,` or `stop`.
/// - `[` / `{`: up to the matching close at depth zero, then on to the next
///   `,` or `stop`.
/// - anything else: a bare token running up to the next `,` or `stop`.
///
/// A value that runs to the end of `text` without a delimiter is the last
/// one; its `rest` is the text length.
pub fn scan_value(text: Text<'_>, stop: u8) -> Result<Span> {
    let bytes = text.as_bytes();
    match bytes.first() {
        None => Err(JsonError::malformed(0, "expected a value")),
        Some(b'"') => {
            let close = closing_quote(bytes, 1)
                .ok_or_else(|| JsonError::malformed(0, "unterminated string"))?;
            let rest = after_value(bytes, close + 1, stop)?;
            Ok(Span {
                start: 1,
                end: close,
                rest,
            })
        }
        Some(&open @ (b'[' | b'{')) => {
            let close = matching_close(bytes, open)
                .ok_or_else(|| JsonError::malformed(0, "unbalanced brackets"))?;
            let rest = after_value(bytes, close + 1, stop)?;
            Ok(Span {
                start: 0,
                end: close + 1,
                rest,
            })
        }
        Some(_) => {
            let end = bytes
                .iter()
                .position(|&b| b == b',' || b == stop)
                .unwrap_or(bytes.len());
            Ok(Span {
                start: 0,
                end,
                rest: (end + 1).min(bytes.len()),
            })
        }
    }
}

/// Find the span of the object key at the start of `text`.
///
/// The key must be quoted. The returned span excludes the quotes and `rest`
/// points just past the `:` separator.
pub fn scan_key(text: Text<'_>) -> Result<Span> {
    let bytes = text.as_bytes();
    if bytes.first() != Some(&b'"') {
        return Err(JsonError::malformed(0, "expected a quoted key"));
    }
    let close =
        closing_quote(bytes, 1).ok_or_else(|| JsonError::malformed(0, "unterminated key"))?;
    let colon = skip_whitespace_from(bytes, close + 1);
    if bytes.get(colon) != Some(&b':') {
        return Err(JsonError::malformed(colon, "expected ':' after key"));
    }
    Ok(Span {
        start: 1,
        end: close,
        rest: colon + 1,
    })
}

/// Find the span of a whole document: one object or array, optionally
/// surrounded by whitespace, with nothing after it.
pub fn scan_root(text: Text<'_>) -> Result<Span> {
    let bytes = text.as_bytes();
    let start = skip_whitespace_from(bytes, 0);
    let open = match bytes.get(start) {
        Some(&open @ (b'[' | b'{')) => open,
        Some(_) => return Err(JsonError::malformed(start, "document must be an object or array")),
        None => return Err(JsonError::malformed(start, "empty document")),
    };
    let close = matching_close(&bytes[start..], open)
        .map(|close| start + close)
        .ok_or_else(|| JsonError::malformed(start, "unbalanced brackets"))?;
    let trailing = skip_whitespace_from(bytes, close + 1);
    if trailing < bytes.len() {
        return Err(JsonError::malformed(trailing, "trailing characters after document"));
    }
    Ok(Span {
        start,
        end: close + 1,
        rest: bytes.len(),
    })
}

fn skip_whitespace_from(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() && is_whitespace(bytes[i]) {
        i += 1;
    }
    i
}

/// Offset of the quote closing a string whose content starts at `from`.
fn closing_quote(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Offset of the delimiter closing the container opened by `bytes[0]`.
///
/// Only the container's own bracket kind is counted; strings are skipped as a
/// whole so brackets inside them do not move the depth.
fn matching_close(bytes: &[u8], open: u8) -> Option<usize> {
    let close = if open == b'[' { b']' } else { b'}' };
    let mut depth = 1usize;
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => i = closing_quote(bytes, i + 1)?,
            b if b == open => depth += 1,
            b if b == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// After a string or container closed at `from - 1`, allow only whitespace up
/// to the next `,` or `stop`. Returns the offset just past that delimiter.
fn after_value(bytes: &[u8], from: usize, stop: u8) -> Result<usize> {
    let i = skip_whitespace_from(bytes, from);
    match bytes.get(i) {
        None => Ok(bytes.len()),
        Some(&b) if b == b',' || b == stop => Ok(i + 1),
        Some(_) => Err(JsonError::malformed(i, "unexpected character after value")),
    }
}
