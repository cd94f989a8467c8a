//! Array headers and indentation.
//!
//! Every encoded array starts with a header announcing its length:
//!
//! ```text
//! items[3]: 1,2,3          primitive array, values inline
//! items[2]:                array of rows
//! items[2]{id, name}:       array of uniform records
//! items[3|]: a|b|c         non-comma delimiter announced in the brackets
//! items[#3]: 1,2,3         optional length marker
//! ```

use crate::options::ToonOptions;
use crate::primitive;

/// Width of one indentation level, in spaces.
pub const INDENT_WIDTH: usize = 2;

/// Writes `key[N]` or `key[N]{f1, f2, ...}`, always followed by `:`.
///
/// Field names are separated by the delimiter and one space. An empty key
/// writes only the bracket segment. Keys and field names are
/// quoted under the same rules as string values.
pub fn write_header(
    out: &mut String,
    key: &str,
    len: usize,
    fields: Option<&[&str]>,
    options: &ToonOptions,
) {
    if !key.is_empty() {
        primitive::write_string(out, key, options.delimiter);
    }

    out.push('[');
    if let Some(marker) = options.length_marker {
        out.push(marker);
    }
    out.push_str(&len.to_string());
    if let Some(symbol) = options.delimiter.header_symbol() {
        out.push(symbol);
    }
    out.push(']');

    if let Some(fields) = fields {
        out.push('{');
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push_str(options.delimiter.as_str());
                out.push(' ');
            }
            primitive::write_string(out, field, options.delimiter);
        }
        out.push('}');
    }

    out.push(':');
}

/// Formats a header into a fresh string.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::header::format_header;
/// use toon_encoder::ToonOptions;
///
/// let options = ToonOptions::new();
/// assert_eq!(format_header("items", 0, None, &options), "items[0]:");
/// let fields = ["id", "name"];
/// assert_eq!(format_header("items", 2, Some(&fields[..]), &options), "items[2]{id, name}:");
/// ```
#[must_use]
pub fn format_header(
    key: &str,
    len: usize,
    fields: Option<&[&str]>,
    options: &ToonOptions,
) -> String {
    let mut out = String::with_capacity(key.len() + 8);
    write_header(&mut out, key, len, fields, options);
    out
}

/// Writes the indentation for `level` nesting levels.
#[inline]
pub fn write_indent(out: &mut String, level: usize) {
    for _ in 0..level * INDENT_WIDTH {
        out.push(' ');
    }
}

/// Indentation string for `level` nesting levels.
#[must_use]
pub fn indent(level: usize) -> String {
    " ".repeat(level * INDENT_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Delimiter;

    #[test]
    fn test_plain_header() {
        let options = ToonOptions::new();
        assert_eq!(format_header("items", 3, None, &options), "items[3]:");
    }

    #[test]
    fn test_record_header() {
        let options = ToonOptions::new();
        assert_eq!(
            format_header("items", 2, Some(&["a", "b", "c"][..]), &options),
            "items[2]{a, b, c}:"
        );
    }

    #[test]
    fn test_delimiter_in_header() {
        let pipe = ToonOptions::new().with_delimiter(Delimiter::Pipe);
        assert_eq!(
            format_header("items", 2, Some(&["a", "b"][..]), &pipe),
            "items[2|]{a| b}:"
        );

        let tab = ToonOptions::new().with_delimiter(Delimiter::Tab);
        assert_eq!(format_header("items", 2, None, &tab), "items[2\t]:");
    }

    #[test]
    fn test_length_marker() {
        let options = ToonOptions::new().with_length_marker('#');
        assert_eq!(format_header("items", 4, None, &options), "items[#4]:");
    }

    #[test]
    fn test_key_and_fields_are_quoted_when_needed() {
        let options = ToonOptions::new();
        assert_eq!(format_header("my key", 1, None, &options), "my key[1]:");
        assert_eq!(format_header("a:b", 1, None, &options), "\"a:b\"[1]:");
        assert_eq!(
            format_header("items", 1, Some(&["first,last"][..]), &options),
            "items[1]{\"first,last\"}:"
        );
    }

    #[test]
    fn test_empty_key() {
        let options = ToonOptions::new();
        assert_eq!(format_header("", 2, None, &options), "[2]:");
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "  ");
        assert_eq!(indent(3), "      ");

        let mut out = String::from("x");
        write_indent(&mut out, 2);
        assert_eq!(out, "x    ");
    }
}
