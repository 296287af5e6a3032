//! Immutable fixed-length text with clipped sub-range extraction.
//!
//! `Text` is the primitive every scanner routine works on. It borrows from the
//! document source, so extracting a sub-range never copies: the result is
//! another view into the same bytes. Indexing is by byte offset; all of the
//! structural characters the scanner looks for are ASCII.

use std::fmt;

/// A borrowed, immutable run of characters with a known length.
#[derive(Clone, Copy, Default, Eq)]
pub struct Text<'a> {
    inner: &'a str,
}

impl<'a> Text<'a> {
    /// The empty text value.
    pub const EMPTY: Text<'static> = Text { inner: "" };

    pub const fn new(inner: &'a str) -> Self {
        Self { inner }
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The byte at `index`, or `None` past the end.
    pub fn at(&self, index: usize) -> Option<u8> {
        self.inner.as_bytes().get(index).copied()
    }

    /// The first byte, or `None` for the empty text.
    pub fn first(&self) -> Option<u8> {
        self.at(0)
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.inner.as_bytes()
    }

    pub fn as_str(&self) -> &'a str {
        self.inner
    }

    /// Extract `len` bytes starting at `start` (everything to the end when
    /// `len` is `None`).
    ///
    /// Both bounds are clipped to the text: a start past the end yields the
    /// empty text and an oversized length stops at the end. Bounds that fall
    /// inside a multi-byte character are moved back to the preceding boundary.
    pub fn substr(&self, start: usize, len: Option<usize>) -> Text<'a> {
        let start = floor_boundary(self.inner, start);
        let end = match len {
            Some(len) => floor_boundary(self.inner, start.saturating_add(len)),
            None => self.inner.len(),
        };
        Text {
            inner: &self.inner[start..end.max(start)],
        }
    }

    /// Extract the half-open byte range `start..end`, clipped like [`Text::substr`].
    pub fn slice(&self, start: usize, end: usize) -> Text<'a> {
        self.substr(start, Some(end.saturating_sub(start)))
    }
}

fn floor_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(inner: &'a str) -> Self {
        Text::new(inner)
    }
}

impl PartialEq for Text<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.len() == other.inner.len() && self.inner == other.inner
    }
}

impl PartialEq<str> for Text<'_> {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for Text<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl fmt::Debug for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner, f)
    }
}

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner)
    }
}
