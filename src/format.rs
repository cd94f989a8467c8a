//! The TOON layout produced by this crate.
//!
//! This module contains documentation only.
//!
//! # Roots
//!
//! A document is a single value. The root may be a primitive or a
//! sequence. A record may only appear as an element of a uniform record
//! array, and key-value maps are never accepted.
//!
//! | Root | Output |
//! |------|--------|
//! | `()` / `None` | `null` |
//! | `true` | `true` |
//! | `3`, `3.5` | `3`, `3.5` |
//! | `f64::INFINITY`, `f64::NAN` | `null` |
//! | `"hello"` | `hello` |
//! | `"a,b"` | `"a,b"` |
//! | `vec![1, 2, 3]` | `items[3]: 1,2,3` |
//!
//! # Numbers
//!
//! Numbers use the native `Display` of their payload: no exponent, `.` as
//! the decimal point, no grouping, and no trailing fractional zeros (`3.0`
//! is written `3`). Integers wider than 64 bits are written in full.
//! Infinities and NaN are written as `null`.
//!
//! # Strings
//!
//! Strings are bare unless one of these holds, in which case they are
//! quoted:
//!
//! - empty, or leading/trailing whitespace
//! - exactly `null`, `true` or `false`
//! - numeric-looking: `42`, `-3.14`, `1e-6`, `007`
//! - contains `:` `"` `\` `[` `]` `{` `}`, a newline, a carriage return or a tab
//! - starts with `-`
//! - contains the active delimiter
//!
//! Inside quotes, `\`, `"`, newline, carriage return and tab are escaped as
//! `\\`, `\"`, `\n`, `\r` and `\t`. Other characters, Unicode included,
//! are written as-is.
//!
//! ```text
//! Alice            bare
//! hello world      bare (inner spaces are fine)
//! "hello,world"    contains the delimiter
//! "true"           reserved word
//! "42"             numeric-looking
//! "-x"             leading hyphen
//! ```
//!
//! # Arrays
//!
//! ## Primitive arrays
//!
//! ```text
//! items[4]: true,false,null,42
//! ```
//!
//! Header, one space, then the values joined by the delimiter. No trailing
//! newline.
//!
//! ## Arrays of rows
//!
//! ```text
//! items[3]:
//!   - 1,2
//!   - 3,4
//!   - 
//! ```
//!
//! Each element is a flat array of primitives. Rows are indented one level,
//! prefixed by `- ` and end with a newline. An empty row still carries the
//! full `- ` marker. Rows never contain further arrays or records.
//!
//! ## Uniform record arrays
//!
//! ```text
//! items[3]{id, name, price}:
//!   1,Widget,9.99
//!   2,Gadget,14.99
//!   3,Tool,19.99
//! ```
//!
//! - fields are sorted by name, both in the header and in each row
//! - every record must have the same field names
//! - a field must hold the same kind in every record; `null` fits any kind
//! - field values must be primitives
//!
//! ## Empty arrays
//!
//! ```text
//! items[0]:
//! ```
//!
//! # Delimiters
//!
//! | Delimiter | Character | Header |
//! |-----------|-----------|--------|
//! | Comma (default) | `,` | `items[3]:` |
//! | Tab | `\t` | `items[3\t]:` |
//! | Pipe | `\|` | `items[3\|]:` |
//!
//! The same delimiter separates inline values, row values, and the field
//! names in a record header.
//!
//! # Length markers
//!
//! With `ToonOptions::with_length_marker('#')`:
//!
//! ```text
//! items[#3]: 1,2,3
//! ```
//!
//! # Rust mapping
//!
//! | Rust | Value |
//! |------|-------|
//! | integers, floats | number (`i128`/`u128` beyond 64 bits keep full precision) |
//! | `char`, `&str`, `String` | string |
//! | unit enum variant | string with the variant name |
//! | `()`, `None`, unit struct | null |
//! | `Vec`, slices, tuples, tuple structs, bytes | array |
//! | structs | record |
//! | maps, data-carrying enum variants | rejected (`Error::UnsupportedType`) |

// This module contains only documentation; no implementation code
