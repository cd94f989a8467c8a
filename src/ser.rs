//! Classification of `Serialize` types into [`Value`]s.
//!
//! [`ValueSerializer`] is the bridge between arbitrary Rust types and the
//! encoder. It does no formatting: it only decides which [`Value`] variant
//! each serde data-model call maps to, and rejects the ones TOON has no
//! layout for.
//!
//! | serde call | Value |
//! |------------|-------|
//! | `bool` | `Bool` |
//! | `i8`..`i64`, `u8`..`u64` | `Number::I64` / `Number::U64` |
//! | `i128`, `u128` | `Number::I64` / `Number::U64` when they fit, else `Number::Big` |
//! | `f32`, `f64` | `Number::F32` / `Number::F64` |
//! | `char`, `str`, unit variant | `String` |
//! | `none`, `unit`, unit struct | `Null` |
//! | `seq`, tuple, tuple struct, bytes | `Array` |
//! | struct | `Object` |
//! | map, newtype/tuple/struct variant | [`Error::UnsupportedType`] |
//!
//! ## Usage
//!
//! ```rust
//! use serde::Serialize;
//! use toon_encoder::{to_value, Value};
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&vec![Point { x: 1, y: 2 }]).unwrap();
//! let first = value.as_array().and_then(|items| items.first());
//! assert!(first.map_or(false, Value::is_object));
//! ```

use crate::{Error, Number, Record, Result, Value};
use serde::ser::{self, Impossible, Serialize};

/// Serializer producing a [`Value`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueSerializer;

/// Collects sequence-like elements into [`Value::Array`].
pub struct SerializeVec {
    vec: Vec<Value>,
}

/// Collects struct fields into [`Value::Object`].
pub struct SerializeRecord {
    record: Record,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = Impossible<Value, Error>;
    type SerializeMap = Impossible<Value, Error>;
    type SerializeStruct = SerializeRecord;
    type SerializeStructVariant = Impossible<Value, Error>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::I64(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::Number(Number::from(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(Number::U64(v)))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::Number(Number::from(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::F32(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::F64(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v.iter().map(|&b| Value::Number(Number::from(b))).collect();
        Ok(Value::Array(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::UnsupportedType(format!(
            "newtype variant {}::{}",
            name, variant
        )))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::UnsupportedType(format!(
            "tuple variant {}::{}",
            name, variant
        )))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type("key-value map"))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeRecord> {
        Ok(SerializeRecord {
            record: Record::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::UnsupportedType(format!(
            "struct variant {}::{}",
            name, variant
        )))
    }
}

impl SerializeVec {
    fn with_capacity(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeStruct for SerializeRecord {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.record.insert(key, to_value(value)?);
        Ok(())
    }

    fn skip_field(&mut self, _key: &'static str) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.record))
    }
}

pub(crate) fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    struct Unit;

    #[derive(Serialize)]
    struct Meters(f32);

    #[derive(Serialize)]
    struct Pair(u8, &'static str);

    #[derive(Serialize)]
    enum Shape {
        Dot,
        Circle(f64),
        Line(i32, i32),
        Rect { w: u32, h: u32 },
    }

    #[test]
    fn test_primitives() {
        assert_eq!(to_value(&true).unwrap(), Value::Bool(true));
        assert_eq!(to_value(&-3i8).unwrap(), Value::Number(Number::I64(-3)));
        assert_eq!(to_value(&7u32).unwrap(), Value::Number(Number::U64(7)));
        assert_eq!(to_value(&1.5f32).unwrap(), Value::Number(Number::F32(1.5)));
        assert_eq!(to_value(&'c').unwrap(), Value::from("c"));
        assert_eq!(to_value("txt").unwrap(), Value::from("txt"));
        assert_eq!(to_value(&()).unwrap(), Value::Null);
        assert_eq!(to_value(&None::<u8>).unwrap(), Value::Null);
        assert_eq!(to_value(&Some(2u8)).unwrap(), Value::from(2u8));
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(to_value(&5i128).unwrap(), Value::Number(Number::I64(5)));
        assert_eq!(
            to_value(&u128::MAX).unwrap(),
            Value::Number(Number::Big(BigInt::from(u128::MAX)))
        );
    }

    #[test]
    fn test_structs_become_records() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();
        let record = value.as_object().expect("record");
        assert_eq!(record.get("x"), Some(&Value::from(1)));
        assert_eq!(record.get("y"), Some(&Value::from(2)));
    }

    #[test]
    fn test_newtype_unit_and_tuple_structs() {
        assert_eq!(to_value(&Unit).unwrap(), Value::Null);
        assert_eq!(to_value(&Meters(2.5)).unwrap(), Value::from(2.5f32));
        assert_eq!(
            to_value(&Pair(1, "a")).unwrap(),
            Value::Array(vec![Value::from(1u8), Value::from("a")])
        );
        assert_eq!(
            to_value(&(1, "b")).unwrap(),
            Value::Array(vec![Value::from(1), Value::from("b")])
        );
    }

    #[test]
    fn test_enum_variants() {
        assert_eq!(to_value(&Shape::Dot).unwrap(), Value::from("Dot"));
        for shape in [Shape::Circle(1.0), Shape::Line(0, 1), Shape::Rect { w: 1, h: 2 }] {
            assert!(matches!(to_value(&shape), Err(Error::UnsupportedType(_))));
        }
    }

    #[test]
    fn test_maps_rejected() {
        let mut map = BTreeMap::new();
        map.insert("a", 1);
        assert_eq!(
            to_value(&map),
            Err(Error::UnsupportedType("key-value map".to_string()))
        );
    }

    #[test]
    fn test_nested_map_rejected() {
        let mut map = BTreeMap::new();
        map.insert("a", 1);
        assert!(to_value(&vec![map]).is_err());
    }

    #[test]
    fn test_bytes() {
        let bytes = bytes_value(&[1, 2]);
        assert_eq!(
            bytes,
            Value::Array(vec![Value::from(1u8), Value::from(2u8)])
        );
    }

    fn bytes_value(bytes: &[u8]) -> Value {
        ser::Serializer::serialize_bytes(ValueSerializer, bytes).unwrap()
    }
}
