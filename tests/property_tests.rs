//! Property-based tests for the primitive and sequence encoders.
//!
//! These check guarantees that must hold for every input rather than for
//! hand-picked cases: determinism, reversible escaping and unambiguous bare
//! strings.

use proptest::prelude::*;
use toon_encoder::primitive::{escape_string, format_string, is_bare_string};
use toon_encoder::{to_string, to_string_with_options, Delimiter, ToonOptions};

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn delimiter() -> impl Strategy<Value = Delimiter> {
    prop_oneof![
        Just(Delimiter::Comma),
        Just(Delimiter::Tab),
        Just(Delimiter::Pipe),
    ]
}

proptest! {
    #[test]
    fn prop_deterministic_strings(s in any::<String>()) {
        prop_assert_eq!(to_string(&s).unwrap(), to_string(&s).unwrap());
    }

    #[test]
    fn prop_deterministic_floats(f in any::<f64>()) {
        prop_assert_eq!(to_string(&f).unwrap(), to_string(&f).unwrap());
    }

    #[test]
    fn prop_integers_render_natively(n in any::<i64>()) {
        prop_assert_eq!(to_string(&n).unwrap(), n.to_string());
    }

    #[test]
    fn prop_finite_floats_never_null(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert_ne!(to_string(&f).unwrap(), "null");
    }

    #[test]
    fn prop_escape_roundtrip(s in any::<String>()) {
        prop_assert_eq!(unescape(&escape_string(&s)), s);
    }

    #[test]
    fn prop_quoted_strings_unescape_to_original(s in any::<String>(), delim in delimiter()) {
        let formatted = format_string(&s, delim);
        if is_bare_string(&s, delim) {
            prop_assert_eq!(formatted, s);
        } else {
            prop_assert!(formatted.starts_with('"') && formatted.ends_with('"'));
            prop_assert_eq!(unescape(&formatted[1..formatted.len() - 1]), s);
        }
    }

    #[test]
    fn prop_bare_strings_are_unambiguous(s in "[ -~]{0,12}", delim in delimiter()) {
        if is_bare_string(&s, delim) {
            prop_assert!(!s.is_empty());
            prop_assert!(s.trim() == s);
            prop_assert!(!s.contains(delim.as_char()));
            prop_assert!(!s.starts_with('-'));
            prop_assert!(!s.bytes().all(|b| b.is_ascii_digit()));
            prop_assert!(!["null", "true", "false"].contains(&s.as_str()));
        }
    }

    #[test]
    fn prop_primitive_array_header_counts(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let toon = to_string(&v).unwrap();
        let expected = format!("items[{}]:", v.len());
        prop_assert!(toon.starts_with(&expected));
    }

    #[test]
    fn prop_rows_one_line_each(rows in prop::collection::vec(prop::collection::vec(any::<u16>(), 0..5), 1..10)) {
        let toon = to_string(&rows).unwrap();
        prop_assert_eq!(toon.lines().count(), rows.len() + 1);
        prop_assert!(toon.ends_with('\n'));
    }

    #[test]
    fn prop_delimiter_joins_inline_values(v in prop::collection::vec(any::<u8>(), 1..10), delim in delimiter()) {
        let options = ToonOptions::new().with_delimiter(delim);
        let toon = to_string_with_options(&v, options).unwrap();
        let body = toon.split_once("]: ").map(|(_, body)| body).unwrap();
        prop_assert_eq!(body.split(delim.as_char()).count(), v.len());
    }
}
