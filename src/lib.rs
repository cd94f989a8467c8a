//! # toon_encoder
//!
//! A Serde-driven encoder for the TOON (Token-Oriented Object Notation) format.
//!
//! ## What is TOON?
//!
//! TOON is a compact, indentation- and delimiter-based text format meant as a
//! denser alternative to JSON or YAML when handing data to Large Language
//! Models. Arrays carry an explicit length header, strings are unquoted
//! whenever that is unambiguous, and arrays of uniform records collapse into
//! a single header plus one row per record.
//!
//! ## Key Features
//!
//! - **Strict classification**: every input is exactly one of null, boolean,
//!   number, string or sequence; anything else fails loudly
//! - **Three array layouts**: inline primitives, rows of primitives, and
//!   uniform record tables
//! - **Precision preserving numbers**: `f32`, `u64` and `i128` values render
//!   with their own native precision
//! - **Serde compatible**: works with any `#[derive(Serialize)]` type
//!
//! ## Quick Start
//!
//! ```rust
//! use toon_encoder::to_string;
//!
//! assert_eq!(to_string(&()).unwrap(), "null");
//! assert_eq!(to_string(&3.5).unwrap(), "3.5");
//! assert_eq!(to_string("hello").unwrap(), "hello");
//! assert_eq!(to_string("a,b").unwrap(), "\"a,b\"");
//! assert_eq!(to_string(&vec![1, 2, 3]).unwrap(), "items[3]: 1,2,3");
//! assert_eq!(
//!     to_string(&vec![vec![1, 2], vec![3, 4]]).unwrap(),
//!     "items[2]:\n  - 1,2\n  - 3,4\n"
//! );
//! ```
//!
//! ### Arrays of Records (Tabular Format)
//!
//! ```rust
//! use serde::Serialize;
//! use toon_encoder::to_string;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let users = vec![
//!     User { id: 1, name: "Alice".into(), active: true },
//!     User { id: 2, name: "Bob".into(), active: false },
//! ];
//!
//! let toon = to_string(&users).unwrap();
//! assert_eq!(toon, "items[2]{active, id, name}:\n  true,1,Alice\n  false,2,Bob\n");
//! ```
//!
//! ### Working with Values Directly
//!
//! ```rust
//! use toon_encoder::{encode, toon};
//!
//! let value = toon!([["x", "y"], ["z"]]);
//! assert_eq!(encode(&value).unwrap(), "items[2]:\n  - x,y\n  - z\n");
//! ```
//!
//! ## Errors
//!
//! Encoding is all-or-nothing. Maps and data-carrying enum variants are
//! [`Error::UnsupportedType`], records with differing fields are
//! [`Error::HeterogeneousCollection`], and sequences that mix element kinds
//! or nest deeper than two levels are [`Error::UnsupportedShape`].
//!
//! ## Format Details
//!
//! See the [`format`] module for the complete layout rules.

pub mod classify;
pub mod encoder;
pub mod error;
pub mod format;
pub mod header;
pub mod macros;
pub mod options;
pub mod primitive;
pub mod record;
pub mod ser;
pub mod value;

pub use encoder::{encode, encode_with_options, Encoder};
pub use error::{Error, Result};
pub use options::{Delimiter, ToonOptions};
pub use record::Record;
pub use ser::ValueSerializer;
pub use value::{Kind, Number, Value};

use serde::Serialize;

/// Serialize any `T: Serialize` to a TOON string.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::to_string;
///
/// assert_eq!(to_string(&vec!["a", "b"]).unwrap(), "items[2]: a,b");
/// assert_eq!(to_string(&f64::INFINITY).unwrap(), "null");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be classified or its shape has no
/// TOON layout.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, ToonOptions::default())
}

/// Serialize any `T: Serialize` to a TOON string with custom options.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::{to_string_with_options, Delimiter, ToonOptions};
///
/// let options = ToonOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .with_length_marker('#');
/// let toon = to_string_with_options(&vec!["a,b", "c"], options).unwrap();
/// assert_eq!(toon, "items[#2|]: a,b|c");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: ToonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    encode_with_options(&value, &options)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_encoder::{to_value, Kind};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.kind(), Kind::Object);
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for maps and data-carrying enum variants.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}
