//! Rendering of leaf values.
//!
//! Null, booleans and numbers have one fixed textual form each. Strings are
//! escaped and then written bare when that cannot be confused with any
//! other token, or wrapped in double quotes otherwise.
//!
//! ```rust
//! use toon_encoder::primitive::{format_string, is_bare_string};
//! use toon_encoder::Delimiter;
//!
//! assert!(is_bare_string("hello world", Delimiter::Comma));
//! assert_eq!(format_string("a,b", Delimiter::Comma), "\"a,b\"");
//! assert_eq!(format_string("a,b", Delimiter::Pipe), "a,b");
//! ```

use crate::options::Delimiter;
use crate::value::{Number, Value};
use std::iter::Peekable;
use std::str::Chars;

/// Characters that always force quoting.
const STRUCTURAL_CHARS: [char; 10] = [':', '"', '\\', '[', ']', '{', '}', '\n', '\r', '\t'];

const RESERVED_WORDS: [&str; 3] = ["null", "true", "false"];

#[inline]
pub fn format_null() -> &'static str {
    "null"
}

#[inline]
pub fn format_bool(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

/// Canonical decimal form of a number; non-finite values become `null`.
pub fn format_number(n: &Number) -> String {
    n.to_string()
}

/// Escapes backslash, double quote, newline, carriage return and tab.
///
/// Each character is escaped at most once, so a backslash introduced by
/// one substitution is never escaped again.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::primitive::escape_string;
///
/// assert_eq!(escape_string("a\"b"), "a\\\"b");
/// assert_eq!(escape_string("line\nnext"), "line\\nnext");
/// assert_eq!(escape_string("C:\\tmp"), "C:\\\\tmp");
/// ```
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s);
    out
}

fn escape_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
}

/// Returns `true` when `s` can be written without surrounding quotes.
///
/// A bare string is non-empty, has no surrounding whitespace, is not a
/// reserved word, does not look like a number, contains no structural
/// character or the active delimiter, and does not start with `-`.
pub fn is_bare_string(s: &str, delimiter: Delimiter) -> bool {
    if s.is_empty() {
        return false;
    }
    if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) {
        return false;
    }
    if RESERVED_WORDS.contains(&s) {
        return false;
    }
    if looks_like_number(s) || has_leading_zero(s) {
        return false;
    }
    if s.contains(&STRUCTURAL_CHARS[..]) {
        return false;
    }
    if s.starts_with('-') {
        return false;
    }
    !s.contains(delimiter.as_char())
}

/// Formats a string, quoting it unless it is bare.
pub fn format_string(s: &str, delimiter: Delimiter) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_string(&mut out, s, delimiter);
    out
}

pub(crate) fn write_string(out: &mut String, s: &str, delimiter: Delimiter) {
    if is_bare_string(s, delimiter) {
        out.push_str(s);
    } else {
        out.push('"');
        escape_into(out, s);
        out.push('"');
    }
}

/// Writes a primitive value. Returns `false` without writing anything when
/// `value` is not a primitive.
pub(crate) fn write_primitive(out: &mut String, value: &Value, delimiter: Delimiter) -> bool {
    match value {
        Value::Null => out.push_str(format_null()),
        Value::Bool(b) => out.push_str(format_bool(*b)),
        Value::Number(n) => out.push_str(&format_number(n)),
        Value::String(s) => write_string(out, s, delimiter),
        Value::Array(_) | Value::Object(_) => return false,
    }
    true
}

/// Matches `-?\d+(\.\d+)?([eE][+-]?\d+)?` over the whole string.
///
/// `\d` is any Unicode numeric character, so `١٢٣` counts as numeric.
fn looks_like_number(s: &str) -> bool {
    let mut chars = s.chars().peekable();
    chars.next_if_eq(&'-');

    if digits(&mut chars) == 0 {
        return false;
    }
    if chars.next_if_eq(&'.').is_some() && digits(&mut chars) == 0 {
        return false;
    }
    if chars.next_if(|c| matches!(c, 'e' | 'E')).is_some() {
        chars.next_if(|c| matches!(c, '+' | '-'));
        if digits(&mut chars) == 0 {
            return false;
        }
    }

    chars.next().is_none()
}

fn digits(chars: &mut Peekable<Chars<'_>>) -> usize {
    let mut count = 0;
    while chars.next_if(|c| c.is_numeric()).is_some() {
        count += 1;
    }
    count
}

/// Matches `0\d+`, integers written with a leading zero.
fn has_leading_zero(s: &str) -> bool {
    match s.strip_prefix('0') {
        Some(rest) => !rest.is_empty() && rest.chars().all(char::is_numeric),
        None => false,
    }
}
