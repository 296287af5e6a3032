//! Path lookups: walk a sequence of keys and indices into a value tree.
//!
//! A path is a slice of [`PathKey`]s, usually built with the [`path!`] macro:
//!
//! ```
//! use constjson_core::{path, Document, Scalar, Value};
//!
//! let doc = Document::parse(r#"{"m":{"n":[1,{"k":"v"}]}}"#).unwrap();
//! let v = doc.get(&path!["m", "n", 1, "k"]).unwrap();
//! assert_eq!(v, Value::Scalar(Scalar::String("v")));
//! ```
//!
//! Each hop resolves only the chain links it has to step over, so the cost of
//! a lookup is proportional to the text in front of the target, not to the
//! size of the document.
//!
//! [`path!`]: crate::path!

use std::fmt;

use tracing::trace;

use crate::classify::Scalar;
use crate::error::{JsonError, Result};
use crate::tree::{Array, Object, Value};

/// One hop of a path: a named object key or a position in an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKey<'k> {
    Key(&'k str),
    Index(usize),
}

impl<'k> From<&'k str> for PathKey<'k> {
    fn from(key: &'k str) -> Self {
        PathKey::Key(key)
    }
}

impl<'k> From<&'k String> for PathKey<'k> {
    fn from(key: &'k String) -> Self {
        PathKey::Key(key.as_str())
    }
}

impl From<usize> for PathKey<'_> {
    fn from(index: usize) -> Self {
        PathKey::Index(index)
    }
}

impl fmt::Display for PathKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Key(key) => write!(f, "{key:?}"),
            PathKey::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Build a fixed-size array of [`PathKey`]s. String segments become keys and
/// `usize` segments become indices.
///
/// ```
/// use constjson_core::{path, PathKey};
///
/// assert_eq!(path!["b", 1], [PathKey::Key("b"), PathKey::Index(1)]);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        [] as [$crate::PathKey<'static>; 0]
    };
    ($($segment:expr),+ $(,)?) => {
        [$($crate::PathKey::from($segment)),+]
    };
}

/// Resolve `path` starting at `value`.
///
/// An empty path returns `value` itself. A key must be applied to an object
/// and an index to an array, otherwise the lookup fails with
/// [`JsonError::TypeMismatch`]. Running off the end of an object or array
/// fails with [`JsonError::KeyNotFound`] or [`JsonError::IndexOutOfRange`].
pub fn get<'a>(value: Value<'a>, path: &[PathKey<'_>]) -> Result<Value<'a>> {
    let Some((head, rest)) = path.split_first() else {
        return Ok(value);
    };
    trace!(segment = %head, remaining = rest.len(), "path step");

    let next = match (*head, value) {
        (PathKey::Key(key), Value::Object(object)) => object.get(key)?,
        (PathKey::Index(index), Value::Array(array)) => array.get(index)?,
        (PathKey::Key(_), other) => {
            return Err(JsonError::TypeMismatch {
                expected: "object",
                found: other.kind(),
            })
        }
        (PathKey::Index(_), other) => {
            return Err(JsonError::TypeMismatch {
                expected: "array",
                found: other.kind(),
            })
        }
    };
    get(next, rest)
}

/// Resolve `path`, substituting `default` when a key or index is absent.
///
/// Only the two "absent" failures are replaced. Scan errors, invalid literals
/// and type mismatches along the way are still returned.
pub fn get_or<'a>(value: Value<'a>, path: &[PathKey<'_>], default: Value<'a>) -> Result<Value<'a>> {
    match get(value, path) {
        Err(e) if e.is_missing() => {
            trace!(error = %e, "path missing, using default");
            Ok(default)
        }
        other => other,
    }
}

/// Resolve `path` and convert the result to `T`.
pub fn get_as<'a, T: FromValue<'a>>(value: Value<'a>, path: &[PathKey<'_>]) -> Result<T> {
    convert(get(value, path)?)
}

/// Resolve `path` and convert the result to `T`, returning `default` when a
/// key or index is absent. A value that is present but of another kind is
/// still a [`JsonError::TypeMismatch`].
pub fn get_as_or<'a, T: FromValue<'a>>(
    value: Value<'a>,
    path: &[PathKey<'_>],
    default: T,
) -> Result<T> {
    match get(value, path) {
        Ok(found) => convert(found),
        Err(e) if e.is_missing() => Ok(default),
        Err(e) => Err(e),
    }
}

fn convert<'a, T: FromValue<'a>>(value: Value<'a>) -> Result<T> {
    T::from_value(value).ok_or(JsonError::TypeMismatch {
        expected: T::EXPECTED,
        found: value.kind(),
    })
}

/// Conversion from a resolved [`Value`] into a concrete Rust type.
pub trait FromValue<'a>: Sized {
    /// Kind name reported when the conversion does not apply.
    const EXPECTED: &'static str;

    fn from_value(value: Value<'a>) -> Option<Self>;
}

impl<'a> FromValue<'a> for Value<'a> {
    const EXPECTED: &'static str = "value";

    fn from_value(value: Value<'a>) -> Option<Self> {
        Some(value)
    }
}

impl<'a> FromValue<'a> for Scalar<'a> {
    const EXPECTED: &'static str = "scalar";

    fn from_value(value: Value<'a>) -> Option<Self> {
        match value {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_value(value: Value<'a>) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> FromValue<'a> for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_value(value: Value<'a>) -> Option<Self> {
        value.as_i64()
    }
}

impl<'a> FromValue<'a> for f64 {
    const EXPECTED: &'static str = "number";

    fn from_value(value: Value<'a>) -> Option<Self> {
        value.as_f64()
    }
}

impl<'a> FromValue<'a> for &'a str {
    const EXPECTED: &'static str = "string";

    fn from_value(value: Value<'a>) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromValue<'a> for Object<'a> {
    const EXPECTED: &'static str = "object";

    fn from_value(value: Value<'a>) -> Option<Self> {
        value.as_object()
    }
}

impl<'a> FromValue<'a> for Array<'a> {
    const EXPECTED: &'static str = "array";

    fn from_value(value: Value<'a>) -> Option<Self> {
        value.as_array()
    }
}

/// `null` converts to `None`; anything else must convert to `T`.
impl<'a, T: FromValue<'a>> FromValue<'a> for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_value(value: Value<'a>) -> Option<Self> {
        if value.is_null() {
            Some(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}
