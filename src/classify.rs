//! Sequence shape classification.
//!
//! Before a sequence is written, all of its elements are scanned once and
//! the sequence is assigned exactly one [`Shape`]. Each shape has its own
//! layout in the encoder; anything that fits none of them is an error.
//!
//! | Shape | Elements | Layout |
//! |-------|----------|--------|
//! | `Empty` | none | `items[0]:` |
//! | `Primitives` | null, bool, number, string | `items[3]: a,b,c` |
//! | `Rows` | arrays of primitives | `items[2]:` + `- a,b` lines |
//! | `Records` | records sharing one signature | `items[2]{f, g}:` + `a,b` lines |

use crate::error::{Error, Result};
use crate::record::Record;
use crate::value::{Kind, Value};

/// The layout category of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<'a> {
    Empty,
    Primitives,
    Rows,
    /// Uniform records; carries the sorted field names shared by every element.
    Records(Vec<&'a str>),
}

/// Classifies a sequence by the kinds of its elements.
///
/// # Errors
///
/// - [`Error::HeterogeneousCollection`] when records disagree on field
///   names or field kinds.
/// - [`Error::UnsupportedShape`] when element kinds are mixed, rows contain
///   nested containers, or record fields hold containers.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::classify::{classify, Shape};
/// use toon_encoder::toon;
///
/// let flat = toon!([1, "a", null]);
/// assert_eq!(classify(flat.as_array().unwrap()).unwrap(), Shape::Primitives);
///
/// let rows = toon!([[1, 2], [3]]);
/// assert_eq!(classify(rows.as_array().unwrap()).unwrap(), Shape::Rows);
///
/// let mixed = toon!([1, [2]]);
/// assert!(classify(mixed.as_array().unwrap()).is_err());
/// ```
pub fn classify(items: &[Value]) -> Result<Shape<'_>> {
    let first = match items.first() {
        Some(first) => first,
        None => return Ok(Shape::Empty),
    };

    match first.kind() {
        Kind::Null | Kind::Bool | Kind::Number | Kind::String => {
            if items.iter().all(Value::is_primitive) {
                Ok(Shape::Primitives)
            } else {
                Err(mixed_elements())
            }
        }
        Kind::Array => {
            for item in items {
                let row = item.as_array().ok_or_else(mixed_elements)?;
                check_row(row)?;
            }
            Ok(Shape::Rows)
        }
        Kind::Object => {
            let records = items
                .iter()
                .map(|item| item.as_object().ok_or_else(mixed_elements))
                .collect::<Result<Vec<&Record>>>()?;
            uniform_fields(&records).map(Shape::Records)
        }
    }
}

/// A row must be a flat sequence of primitives.
fn check_row(row: &[Value]) -> Result<()> {
    for value in row {
        match value.kind() {
            Kind::Array => {
                return Err(Error::unsupported_shape(
                    "sequence nested more than two levels deep",
                ))
            }
            Kind::Object => {
                return Err(Error::unsupported_shape("record inside a sequence row"))
            }
            _ => {}
        }
    }
    Ok(())
}

fn mixed_elements() -> Error {
    Error::unsupported_shape("sequence mixes primitives, sequences and records")
}

/// Returns the shared sorted field names of `records`.
///
/// Null field values are compatible with any kind, so an optional field
/// that is `None` in some records does not break uniformity.
fn uniform_fields<'a>(records: &[&'a Record]) -> Result<Vec<&'a str>> {
    let (first, rest): (&'a Record, _) = match records.split_first() {
        Some((first, rest)) => (*first, rest),
        None => return Ok(Vec::new()),
    };

    let mut expected = first.signature();
    for record in rest {
        let signature = record.signature();
        if signature.len() != expected.len() {
            return Err(Error::HeterogeneousCollection);
        }
        for ((name, kind), (expected_name, expected_kind)) in
            signature.into_iter().zip(expected.iter_mut())
        {
            if name != *expected_name {
                return Err(Error::HeterogeneousCollection);
            }
            if *expected_kind == Kind::Null {
                *expected_kind = kind;
            } else if kind != Kind::Null && kind != *expected_kind {
                return Err(Error::HeterogeneousCollection);
            }
        }
    }

    if let Some((name, kind)) = expected.iter().find(|(_, kind)| !kind.is_primitive()) {
        return Err(Error::UnsupportedShape(format!(
            "record field `{}` holds a nested {}",
            name, kind
        )));
    }

    Ok(expected.into_iter().map(|(name, _)| name).collect())
}
