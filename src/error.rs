//! Error types for TOON encoding.
//!
//! Encoding is all-or-nothing: the first problem found aborts the call and
//! no partial output is returned.
//!
//! ## Error Categories
//!
//! - **Unsupported types**: the value does not classify as null, boolean,
//!   number, string or sequence (for example a key-value map)
//! - **Heterogeneous collections**: a sequence of records whose field sets
//!   or field kinds disagree
//! - **Unsupported shapes**: a sequence mixing primitives, sequences and
//!   records, or nesting deeper than two levels
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use toon_encoder::{to_string, Error};
//!
//! let mut map = HashMap::new();
//! map.insert("key", 1);
//!
//! let result = to_string(&map);
//! assert!(matches!(result, Err(Error::UnsupportedType(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during TOON encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The value does not classify into any encodable category.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Records in one sequence expose different field signatures.
    #[error("Heterogeneous collection: all objects must have the same properties")]
    HeterogeneousCollection,

    /// The sequence has a shape the encoder cannot lay out.
    #[error("Unsupported shape: non-primitive collection serialization not implemented ({0})")]
    UnsupportedShape(String),

    /// Custom error raised by a `Serialize` implementation
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for values that cannot be encoded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_encoder::Error;
    ///
    /// let err = Error::unsupported_type("map");
    /// assert!(err.to_string().contains("map"));
    /// ```
    pub fn unsupported_type(what: &str) -> Self {
        Error::UnsupportedType(what.to_string())
    }

    /// Creates an unsupported shape error describing the offending layout.
    pub fn unsupported_shape(what: &str) -> Self {
        Error::UnsupportedShape(what.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_encoder::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
