//! # constjson-core
//!
//! Zero-copy JSON documents whose text is known up front, navigated with
//! key/index paths.
//!
//! A [`Document`] borrows its source and resolves nothing until a lookup asks
//! for it: each path hop scans just enough text to step over the entries in
//! front of its target. Every string in the result borrows from the source.
//! Pair it with [`static_document!`] to resolve a document once per process.
//!
//! ## Quick start
//!
//! ```rust
//! use constjson_core::{path, Document, Scalar, Value};
//!
//! let doc = Document::parse(r#"{"a":1,"b":[10,20,"x"]}"#).unwrap();
//!
//! assert_eq!(doc.get(&path!["b", 1]).unwrap(), Value::Scalar(Scalar::Integer(20)));
//! assert_eq!(doc.get_as::<&str>(&path!["b", 2]).unwrap(), "x");
//! assert_eq!(
//!     doc.get_or(&path!["c"], Value::from("fallback")).unwrap(),
//!     Value::from("fallback"),
//! );
//! ```
//!
//! ## Supported input
//!
//! Objects, arrays, quoted strings, `true`/`false`/`null`, integers and
//! decimals without exponents. Escape sequences are kept verbatim, never
//! decoded. There is no serializer: documents are read-only.
//!
//! ## Modules
//!
//! - [`text`]: borrowed text primitive with clipped sub-ranges
//! - [`scanner`]: span finding for values and keys
//! - [`classify`]: scalar token type inference
//! - [`tree`]: lazy object/array chains and the `Value` type
//! - [`path`]: `get`/`get_or` path lookups
//! - [`document`]: `Document` entry point and `static_document!`
//! - [`error`]: error type

pub mod classify;
pub mod document;
pub mod error;
pub mod path;
pub mod scanner;
pub mod text;
pub mod tree;

pub use classify::{classify, Scalar};
pub use document::Document;
pub use error::{JsonError, Result};
pub use path::{get, get_as, get_as_or, get_or, FromValue, PathKey};
pub use text::Text;
pub use tree::{Array, ArrayNode, Object, ObjectNode, Value};
