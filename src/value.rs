//! Dynamic value representation for the TOON encoder.
//!
//! [`Value`] is the closed set of shapes the encoder understands. Every
//! input, whether built by hand, with the [`toon!`](crate::toon) macro, or
//! from a `T: Serialize` via [`to_value`](crate::to_value), is first turned
//! into a `Value` and then classified.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, array (sequence) or record
//! - [`Number`]: one numeric category that keeps the native width of its payload
//! - [`Kind`]: the structural category of a value, used for classification
//!
//! ## Creating Values
//!
//! ```rust
//! use toon_encoder::{Kind, Value};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let list = Value::from(vec![Value::from(1), Value::from(2)]);
//!
//! assert_eq!(null.kind(), Kind::Null);
//! assert!(boolean.is_primitive());
//! assert!(number.is_number());
//! assert_eq!(text.as_str(), Some("hello"));
//! assert_eq!(list.kind(), Kind::Array);
//! ```

use crate::Record;
use num_bigint::BigInt;
use std::fmt;

/// A dynamically-typed value accepted by the encoder.
///
/// A value is exactly one variant at a time. `Array` is the ordered
/// sequence type; key-value maps have no representation here and are
/// rejected when a `Value` is built from a `Serialize` type.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    /// A record with named fields. Only encodable inside a uniform record array.
    Object(Record),
}

/// A numeric value.
///
/// All integer widths and floating-point magnitudes belong to the same
/// semantic category; the variant only records which payload preserves the
/// original precision. `0.1f32` stays an `F32` so it renders as `0.1`
/// rather than its widened `f64` expansion.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::Number;
///
/// assert_eq!(Number::from(42u8).to_string(), "42");
/// assert_eq!(Number::from(3.5).to_string(), "3.5");
/// assert_eq!(Number::from(0.1f32).to_string(), "0.1");
/// assert_eq!(Number::from(f64::INFINITY).to_string(), "null");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    /// Integers wider than 64 bits (`i128`, `u128`, or arbitrary precision).
    Big(BigInt),
}

impl Number {
    /// Returns `true` if the payload is an integer of any width.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::I64(_) | Number::U64(_) | Number::Big(_))
    }

    /// Returns `true` unless the payload is an infinite or NaN float.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_encoder::Number;
    ///
    /// assert!(Number::I64(-1).is_finite());
    /// assert!(!Number::F64(f64::NAN).is_finite());
    /// assert!(!Number::F32(f32::NEG_INFINITY).is_finite());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Number::F32(f) => f.is_finite(),
            Number::F64(f) => f.is_finite(),
            Number::I64(_) | Number::U64(_) | Number::Big(_) => true,
        }
    }

    /// Converts this number to an `i64` if it is an integer that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::I64(i) => Some(*i),
            Number::U64(u) => i64::try_from(*u).ok(),
            Number::Big(b) => i64::try_from(b).ok(),
            Number::F32(_) | Number::F64(_) => None,
        }
    }

    /// Converts this number to an `f64`, possibly losing precision.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::I64(i) => *i as f64,
            Number::U64(u) => *u as f64,
            Number::F32(f) => f64::from(*f),
            Number::F64(f) => *f,
            Number::Big(b) => b.to_string().parse().unwrap_or(f64::NAN),
        }
    }
}

/// Renders the canonical, locale-independent TOON form.
///
/// Non-finite floats render as `null`. Finite floats use Rust's shortest
/// round-trip `Display`, which never uses exponent notation and drops a
/// zero fraction (`3.0` renders as `3`).
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_finite() {
            return f.write_str("null");
        }
        match self {
            Number::I64(i) => write!(f, "{}", i),
            Number::U64(u) => write!(f, "{}", u),
            Number::F32(fl) => write!(f, "{}", fl),
            Number::F64(fl) => write!(f, "{}", fl),
            Number::Big(b) => write!(f, "{}", b),
        }
    }
}

macro_rules! number_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::I64(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! number_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::U64(u64::from(value))
                }
            }
        )*
    };
}

number_from_signed!(i8, i16, i32, i64);
number_from_unsigned!(u8, u16, u32, u64);

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::I64(i),
            Err(_) => Number::Big(BigInt::from(value)),
        }
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        match u64::try_from(value) {
            Ok(u) => Number::U64(u),
            Err(_) => Number::Big(BigInt::from(value)),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::F32(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::F64(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Big(value)
    }
}

/// Structural category of a [`Value`].
///
/// Classification is by shape, never by content: an empty array is still
/// `Kind::Array` and the string `"null"` is still `Kind::String`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Returns `true` for the four leaf categories.
    #[inline]
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        matches!(self, Kind::Null | Kind::Bool | Kind::Number | Kind::String)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Returns the structural category of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` for null, booleans, numbers and strings.
    #[inline]
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        self.kind().is_primitive()
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a number, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns its elements. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a record, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Record> {
        match self {
            Value::Object(record) => Some(record),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64, BigInt);

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_structural() {
        assert_eq!(Value::Array(vec![]).kind(), Kind::Array);
        assert_eq!(Value::from("null").kind(), Kind::String);
        assert_eq!(Value::from(0).kind(), Kind::Number);
        assert_eq!(Value::Object(Record::new()).kind(), Kind::Object);
    }

    #[test]
    fn test_is_primitive() {
        assert!(Value::Null.is_primitive());
        assert!(Value::from(false).is_primitive());
        assert!(Value::from(1.5).is_primitive());
        assert!(Value::from("x").is_primitive());
        assert!(!Value::Array(vec![]).is_primitive());
        assert!(!Value::Object(Record::new()).is_primitive());
    }

    #[test]
    fn test_number_widths_keep_payload() {
        assert_eq!(Number::from(-5i8), Number::I64(-5));
        assert_eq!(Number::from(7u16), Number::U64(7));
        assert_eq!(Number::from(u64::MAX), Number::U64(u64::MAX));
        assert_eq!(Number::from(12i128), Number::I64(12));
        assert_eq!(
            Number::from(u128::MAX),
            Number::Big(BigInt::from(u128::MAX))
        );
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::I64(-42).to_string(), "-42");
        assert_eq!(Number::U64(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Number::F64(3.0).to_string(), "3");
        assert_eq!(Number::F64(0.25).to_string(), "0.25");
        assert_eq!(Number::F64(1e21).to_string(), "1000000000000000000000");
        assert_eq!(Number::F32(0.1).to_string(), "0.1");
        assert_eq!(
            Number::from(i128::MIN).to_string(),
            "-170141183460469231731687303715884105728"
        );
    }

    #[test]
    fn test_non_finite_display_as_null() {
        assert_eq!(Number::F64(f64::INFINITY).to_string(), "null");
        assert_eq!(Number::F64(f64::NEG_INFINITY).to_string(), "null");
        assert_eq!(Number::F64(f64::NAN).to_string(), "null");
        assert_eq!(Number::F32(f32::INFINITY).to_string(), "null");
    }

    #[test]
    fn test_number_conversions() {
        assert_eq!(Number::U64(5).as_i64(), Some(5));
        assert_eq!(Number::U64(u64::MAX).as_i64(), None);
        assert_eq!(Number::F64(1.0).as_i64(), None);
        assert_eq!(Number::F32(0.5).as_f64(), 0.5);
        assert_eq!(Number::Big(BigInt::from(9)).as_f64(), 9.0);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::String("a".to_string()));
    }

    #[test]
    fn test_from_vec_converts_elements() {
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::Array(vec![Value::from("a"), Value::from("b")])
        );
        assert_eq!(
            Value::from(vec![Some(1u8), None]),
            Value::Array(vec![Value::from(1u8), Value::Null])
        );
    }

    #[test]
    fn test_collect_into_array() {
        let value: Value = (1..=3).map(Value::from).collect();
        assert_eq!(value.as_array().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(1).as_bool(), None);
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert_eq!(Value::from(2).as_number(), Some(&Number::I64(2)));
        assert!(Value::Object(Record::new()).as_object().is_some());
    }
}
