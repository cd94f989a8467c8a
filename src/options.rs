//! Configuration options for TOON encoding.
//!
//! This module provides types to customize TOON output:
//!
//! - [`ToonOptions`]: Main configuration struct
//! - [`Delimiter`]: Separator between sibling values (comma, tab, or pipe)
//!
//! The indentation width is fixed at two spaces and is not configurable.
//!
//! ## Examples
//!
//! ```rust
//! use toon_encoder::{to_string_with_options, Delimiter, ToonOptions};
//!
//! let options = ToonOptions::new().with_delimiter(Delimiter::Pipe);
//! let toon = to_string_with_options(&vec![1, 2, 3], options).unwrap();
//! assert_eq!(toon, "items[3|]: 1|2|3");
//!
//! let options = ToonOptions::new().with_key("ids").with_length_marker('#');
//! let toon = to_string_with_options(&vec![1, 2, 3], options).unwrap();
//! assert_eq!(toon, "ids[#3]: 1,2,3");
//! ```

/// Default key written in front of a root array header.
pub const DEFAULT_KEY: &str = "items";

/// Delimiter choice for TOON arrays and record rows.
///
/// - **Comma**: Default, most compact
/// - **Tab**: Best for TSV-like output
/// - **Pipe**: Readable for markdown-style tables
///
/// # Examples
///
/// ```rust
/// use toon_encoder::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_str(), "\t");
/// assert_eq!(Delimiter::Pipe.as_str(), "|");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Symbol announced inside an array header's brackets.
    ///
    /// Comma is implicit and returns `None`.
    #[must_use]
    pub const fn header_symbol(&self) -> Option<char> {
        match self {
            Delimiter::Comma => None,
            Delimiter::Tab => Some('\t'),
            Delimiter::Pipe => Some('|'),
        }
    }
}

/// Configuration options for TOON encoding.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::{Delimiter, ToonOptions};
///
/// let options = ToonOptions::new();
/// assert_eq!(options.key, "items");
/// assert_eq!(options.delimiter, Delimiter::Comma);
///
/// let options = ToonOptions::new()
///     .with_delimiter(Delimiter::Tab)
///     .with_key("rows");
/// assert_eq!(options.key, "rows");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ToonOptions {
    pub delimiter: Delimiter,
    /// Key written before the root array header (`items[3]: ...`).
    pub key: String,
    pub length_marker: Option<char>,
}

impl Default for ToonOptions {
    fn default() -> Self {
        ToonOptions {
            delimiter: Delimiter::default(),
            key: DEFAULT_KEY.to_string(),
            length_marker: None,
        }
    }
}

impl ToonOptions {
    /// Creates default options (comma delimiter, `items` key, no length marker).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delimiter for arrays and record rows.
    ///
    /// Strings containing the active delimiter are quoted.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the key written in front of the root array header.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Sets an optional length marker character for arrays.
    ///
    /// When set, array lengths are prefixed with this character (e.g., `[#3]` instead of `[3]`).
    #[must_use]
    pub fn with_length_marker(mut self, marker: char) -> Self {
        self.length_marker = Some(marker);
        self
    }
}
