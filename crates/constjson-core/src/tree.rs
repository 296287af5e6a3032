//! Lazily resolved value tree.
//!
//! An object or array is held as the unparsed text of its body (outer
//! delimiters excluded). Asking a handle for its [`ObjectNode`] / [`ArrayNode`]
//! scans exactly one entry off the front of that text and returns it together
//! with a handle for the rest, so the structure behaves like a linked chain
//!
//! ```text
//! Chain = Empty | Node(key or index, value, next: Chain)
//! ```
//!
//! whose links are only built when a traversal steps onto them. Branches that
//! are never visited are never scanned, which also means a bad literal inside
//! them goes unnoticed until something reads it (see [`Value::validate`]).

use std::fmt;

use tracing::trace;

use crate::classify::{classify, Scalar};
use crate::error::{JsonError, Result};
use crate::scanner::{scan_key, scan_value, skip_whitespace, Span, ARRAY_STOP, OBJECT_STOP};
use crate::text::Text;

/// A node in the document: a scalar, or a lazy handle to an array or object.
///
/// Values are `Copy` and borrow from the document source, so they can be
/// handed out freely and shared across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Scalar(Scalar<'a>),
    Array(Array<'a>),
    Object(Object<'a>),
}

impl<'a> Value<'a> {
    pub const NULL: Value<'static> = Value::Scalar(Scalar::Null);

    /// Turn a scanned span into a value. `text` starts at the value and `span`
    /// is the result of scanning it.
    ///
    /// Quoted strings become string scalars directly, containers become lazy
    /// handles over their body, and bare tokens go through the classifier.
    pub(crate) fn from_span(text: Text<'a>, span: Span) -> Result<Self> {
        let raw = span.value(text);
        match text.first() {
            Some(b'"') => Ok(Value::Scalar(Scalar::String(raw.as_str()))),
            Some(b'{') => Ok(Value::Object(Object::from_body(inner(raw)))),
            Some(b'[') => Ok(Value::Array(Array::from_body(inner(raw)))),
            _ => classify(raw.as_str()).map(Value::Scalar),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(scalar) => scalar.kind(),
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Scalar(Scalar::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    /// Floats, and integers widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Scalar(Scalar::Float(x)) => Some(*x),
            Value::Scalar(Scalar::Integer(n)) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<Object<'a>> {
        match self {
            Value::Object(object) => Some(*object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<Array<'a>> {
        match self {
            Value::Array(array) => Some(*array),
            _ => None,
        }
    }

    /// Walk every branch below this value and return the first scan or
    /// classification error found, if any.
    ///
    /// The walk keeps its own work stack, so nesting depth is bounded by
    /// memory rather than by the thread's call stack. All children of a
    /// container are scanned before descending into the first of them.
    pub fn validate(&self) -> Result<()> {
        let mut pending = vec![*self];
        let mut children = Vec::new();
        while let Some(value) = pending.pop() {
            match value {
                Value::Scalar(_) => continue,
                Value::Array(array) => {
                    for element in array {
                        children.push(element?);
                    }
                }
                Value::Object(object) => {
                    for entry in object {
                        children.push(entry?.1);
                    }
                }
            }
            // Reversed so the first child is popped next.
            pending.extend(children.drain(..).rev());
        }
        Ok(())
    }
}

/// Scalars print in display form, containers print their source text.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Value::Array(array) => fmt::Display::fmt(array, f),
            Value::Object(object) => fmt::Display::fmt(object, f),
        }
    }
}

impl<'a> From<Scalar<'a>> for Value<'a> {
    fn from(scalar: Scalar<'a>) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Integer(n))
    }
}

impl From<f64> for Value<'_> {
    fn from(x: f64) -> Self {
        Value::Scalar(Scalar::Float(x))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Scalar(Scalar::String(s))
    }
}

/// Strip exactly the outer delimiter pair from a container span.
fn inner(raw: Text<'_>) -> Text<'_> {
    raw.slice(1, raw.len().saturating_sub(1))
}

// ============================================================================
// Objects
// ============================================================================

/// Lazy handle to the remaining key/value pairs of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object<'a> {
    body: Text<'a>,
}

/// One resolved link of an object chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectNode<'a> {
    /// No more pairs. Also what a key lookup runs into when nothing matched.
    Empty,
    Entry {
        key: &'a str,
        value: Value<'a>,
        next: Object<'a>,
    },
}

impl<'a> Object<'a> {
    pub(crate) fn from_body(body: Text<'a>) -> Self {
        Self { body }
    }

    /// An object with no pairs.
    pub fn empty() -> Self {
        Self { body: Text::EMPTY }
    }

    /// The unparsed text of the remaining pairs.
    pub fn body(&self) -> Text<'a> {
        self.body
    }

    /// Scan the first pair off the body.
    pub fn node(&self) -> Result<ObjectNode<'a>> {
        let text = skip_whitespace(self.body);
        if text.is_empty() {
            return Ok(ObjectNode::Empty);
        }

        let key_span = scan_key(text)?;
        let key = key_span.value(text).as_str();

        let value_text = skip_whitespace(key_span.rest(text));
        let value_span = scan_value(value_text, OBJECT_STOP)?;
        let value = Value::from_span(value_text, value_span)?;
        trace!(key, kind = value.kind(), "scanned object entry");

        Ok(ObjectNode::Entry {
            key,
            value,
            next: Object::from_body(value_span.rest(value_text)),
        })
    }

    /// The value of the first pair whose key is `key`, or `None` once the
    /// chain runs out.
    pub fn find(&self, key: &str) -> Result<Option<Value<'a>>> {
        let mut current = *self;
        loop {
            match current.node()? {
                ObjectNode::Empty => return Ok(None),
                ObjectNode::Entry { key: k, value, .. } if k == key => return Ok(Some(value)),
                ObjectNode::Entry { next, .. } => current = next,
            }
        }
    }

    /// Like [`Object::find`], but a missing key is [`JsonError::KeyNotFound`].
    pub fn get(&self, key: &str) -> Result<Value<'a>> {
        self.find(key)?.ok_or_else(|| JsonError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Iterate over `(key, value)` pairs in document order. The iterator
    /// yields the first scan error and then stops.
    pub fn iter(&self) -> Entries<'a> {
        Entries {
            next: Some(*self),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = Result<&'a str>> {
        self.iter().map(|entry| entry.map(|(key, _)| key))
    }

    /// Number of pairs. Scans the whole chain.
    pub fn len(&self) -> Result<usize> {
        self.iter().try_fold(0, |n, entry| entry.map(|_| n + 1))
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(matches!(self.node()?, ObjectNode::Empty))
    }
}

impl fmt::Display for Object<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.body)
    }
}

impl<'a> IntoIterator for Object<'a> {
    type Item = Result<(&'a str, Value<'a>)>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the pairs of an [`Object`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    next: Option<Object<'a>>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = Result<(&'a str, Value<'a>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        match current.node() {
            Ok(ObjectNode::Empty) => None,
            Ok(ObjectNode::Entry { key, value, next }) => {
                self.next = Some(next);
                Some(Ok((key, value)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

// ============================================================================
// Arrays
// ============================================================================

/// Lazy handle to the remaining elements of an array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Array<'a> {
    body: Text<'a>,
}

/// One resolved link of an array chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayNode<'a> {
    /// No more elements. Also what an index lookup runs into when it is past
    /// the end.
    Empty,
    Element { value: Value<'a>, next: Array<'a> },
}

impl<'a> Array<'a> {
    pub(crate) fn from_body(body: Text<'a>) -> Self {
        Self { body }
    }

    /// An array with no elements.
    pub fn empty() -> Self {
        Self { body: Text::EMPTY }
    }

    /// The unparsed text of the remaining elements.
    pub fn body(&self) -> Text<'a> {
        self.body
    }

    /// Scan the first element off the body.
    pub fn node(&self) -> Result<ArrayNode<'a>> {
        let text = skip_whitespace(self.body);
        if text.is_empty() {
            return Ok(ArrayNode::Empty);
        }

        let span = scan_value(text, ARRAY_STOP)?;
        let value = Value::from_span(text, span)?;
        trace!(kind = value.kind(), "scanned array element");

        Ok(ArrayNode::Element {
            value,
            next: Array::from_body(span.rest(text)),
        })
    }

    /// The element at `index`, or `None` when the array is shorter.
    pub fn nth(&self, index: usize) -> Result<Option<Value<'a>>> {
        let mut current = *self;
        let mut remaining = index;
        loop {
            match current.node()? {
                ArrayNode::Empty => return Ok(None),
                ArrayNode::Element { value, .. } if remaining == 0 => return Ok(Some(value)),
                ArrayNode::Element { next, .. } => {
                    current = next;
                    remaining -= 1;
                }
            }
        }
    }

    /// Like [`Array::nth`], but a short array is [`JsonError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<Value<'a>> {
        self.nth(index)?
            .ok_or(JsonError::IndexOutOfRange { index })
    }

    /// Iterate over the elements in document order. The iterator yields the
    /// first scan error and then stops.
    pub fn iter(&self) -> Elements<'a> {
        Elements {
            next: Some(*self),
        }
    }

    /// Number of elements. Scans the whole chain.
    pub fn len(&self) -> Result<usize> {
        self.iter().try_fold(0, |n, value| value.map(|_| n + 1))
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(matches!(self.node()?, ArrayNode::Empty))
    }
}

impl fmt::Display for Array<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.body)
    }
}

impl<'a> IntoIterator for Array<'a> {
    type Item = Result<Value<'a>>;
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of an [`Array`].
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    next: Option<Array<'a>>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = Result<Value<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        match current.node() {
            Ok(ArrayNode::Empty) => None,
            Ok(ArrayNode::Element { value, next }) => {
                self.next = Some(next);
                Some(Ok(value))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
