//! Error types for document scanning and path lookups.

use thiserror::Error;

/// Errors that can occur while scanning a document or walking a path through it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// A scalar token matched none of `null`, `true`, `false`, a quoted
    /// string, an integer or a decimal.
    #[error("invalid literal: {literal:?}")]
    InvalidLiteral { literal: String },

    /// An integer literal does not fit in an `i64`.
    #[error("integer literal out of range: {literal}")]
    IntegerOverflow { literal: String },

    /// A named path segment matched no key of the object it was applied to.
    #[error("key not found: {key:?}")]
    KeyNotFound { key: String },

    /// A positional path segment went past the end of the array.
    #[error("index out of range: {index}")]
    IndexOutOfRange { index: usize },

    /// A key was applied to a non-object, an index to a non-array, or a typed
    /// lookup found a value of another kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The text around a value could not be split into spans: an unterminated
    /// string, unbalanced brackets, a key without `:` or stray characters.
    /// `offset` is relative to the text being scanned at the time.
    #[error("malformed document at offset {offset}: {reason}")]
    MalformedSpan { offset: usize, reason: &'static str },
}

impl JsonError {
    /// True for the two "nothing at this path" errors that `get_or` replaces
    /// with its default.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            JsonError::KeyNotFound { .. } | JsonError::IndexOutOfRange { .. }
        )
    }

    pub(crate) fn malformed(offset: usize, reason: &'static str) -> Self {
        JsonError::MalformedSpan { offset, reason }
    }
}

/// Convenience alias used throughout constjson-core.
pub type Result<T> = std::result::Result<T, JsonError>;
