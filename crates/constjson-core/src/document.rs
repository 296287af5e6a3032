//! Document entry point.

use tracing::debug;

use crate::error::Result;
use crate::path::{self, FromValue, PathKey};
use crate::scanner::{scan_root, Span};
use crate::text::Text;
use crate::tree::Value;

/// A JSON document borrowed from its source text.
///
/// Parsing only checks the outer container; everything inside is resolved on
/// demand by the lookups. A `Document` is `Copy`, immutable, and can be
/// shared between threads without synchronization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Document<'a> {
    source: &'a str,
    root: Value<'a>,
}

impl<'a> Document<'a> {
    /// Parse `source`, which must hold one object or array surrounded only by
    /// whitespace.
    pub fn parse(source: &'a str) -> Result<Self> {
        let span = scan_root(Text::new(source))?;
        let raw = span.value(Text::new(source));
        let root = Value::from_span(
            raw,
            Span {
                start: 0,
                end: raw.len(),
                rest: raw.len(),
            },
        )?;
        debug!(bytes = source.len(), kind = root.kind(), "parsed document");
        Ok(Self { source, root })
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn root(&self) -> Value<'a> {
        self.root
    }

    /// See [`path::get`].
    pub fn get(&self, path: &[PathKey<'_>]) -> Result<Value<'a>> {
        path::get(self.root, path)
    }

    /// See [`path::get_or`].
    pub fn get_or(&self, path: &[PathKey<'_>], default: Value<'a>) -> Result<Value<'a>> {
        path::get_or(self.root, path, default)
    }

    /// See [`path::get_as`].
    pub fn get_as<T: FromValue<'a>>(&self, path: &[PathKey<'_>]) -> Result<T> {
        path::get_as(self.root, path)
    }

    /// See [`path::get_as_or`].
    pub fn get_as_or<T: FromValue<'a>>(&self, path: &[PathKey<'_>], default: T) -> Result<T> {
        path::get_as_or(self.root, path, default)
    }

    /// Eagerly scan every branch and report the first error.
    pub fn validate(&self) -> Result<()> {
        self.root.validate()
    }
}

/// Declare a `static` [`Document`] resolved once, on first access.
///
/// The source must be a `&'static str`, such as a literal or `include_str!`.
/// A source whose outer container cannot be scanned aborts initialization with
/// a panic naming the static.
///
/// ```
/// use constjson_core::{path, static_document};
///
/// static_document! {
///     static SETTINGS = r#"{"retries": 3, "hosts": ["a", "b"]}"#;
/// }
///
/// assert_eq!(SETTINGS.get_as::<i64>(&path!["retries"]).unwrap(), 3);
/// assert_eq!(SETTINGS.get_as::<&str>(&path!["hosts", 1]).unwrap(), "b");
/// ```
#[macro_export]
macro_rules! static_document {
    ($(#[$attr:meta])* $vis:vis static $name:ident = $source:expr;) => {
        $(#[$attr])*
        $vis static $name: ::std::sync::LazyLock<$crate::Document<'static>> =
            ::std::sync::LazyLock::new(|| match $crate::Document::parse($source) {
                Ok(document) => document,
                Err(error) => panic!(
                    "invalid JSON document in static `{}`: {}",
                    stringify!($name),
                    error
                ),
            });
    };
}
