//! A TOML parser and tree-to-JSON converter.
//!
//! Parses a whole TOML buffer into an owned tree of typed values, then
//! serializes that tree as pretty-printed JSON. Intended for command-line
//! utilities that convert `.toml` documents to `.json` and for programs
//! that consume TOML configuration.
//!
//! # Quick start
//!
//! Use [`parse`] with a TOML string to get the root [`Table`], and
//! [`to_json`] to render it.
//!
//! ```
//! # fn main() -> Result<(), toml2json::Error> {
//! let doc = toml2json::parse("key = 'value'")?;
//! let json = toml2json::to_json(&doc, 0, true);
//! assert_eq!(json, "{\n  \"key\": \"value\"\n}");
//! # Ok(())
//! # }
//! ```
//!
//! Traverse the tree for inspection via the typed accessors on [`Value`]:
//!
//! ```
//! # fn main() -> Result<(), toml2json::Error> {
//! let doc = toml2json::parse("[server]\nport = 8080")?;
//! let server = doc.get("server").and_then(|v| v.as_table());
//! let port = server.and_then(|t| t.get("port"));
//! assert_eq!(port.and_then(|v| v.as_integer()), Some(8080));
//! # Ok(())
//! # }
//! ```
//!
//! Tables iterate in lexicographic key order, which is also the order the
//! JSON serializer emits entries in. Arrays are type-homogeneous; an
//! `[[x]]` header may only extend arrays it created itself, never a static
//! `x = [...]` literal.

#![deny(unsafe_code)]

mod array;
mod error;
mod json;
mod parser;
mod span;
mod table;
mod time;
mod value;

pub use array::Array;
pub use error::{Error, ErrorKind};
pub use json::to_json;
pub use parser::parse;
pub use span::Span;
pub use table::Table;
pub use time::DateTime;
pub use value::{DescribedFloat, Value};
