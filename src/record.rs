//! Records: values with explicitly named fields.
//!
//! A [`Record`] is what a Rust struct becomes when it passes through
//! [`to_value`](crate::to_value). Fields keep their declaration order, but
//! array headers and rows always list them sorted by name, so two records
//! with the same fields declared in different orders still form a uniform
//! array.
//!
//! ## Signatures
//!
//! [`Record::signature`] is the structural type of a record: its sorted
//! field names, each paired with the [`Kind`] of the value it holds. The
//! encoder compares signatures to decide whether a sequence of records can
//! share one header.
//!
//! ```rust
//! use toon_encoder::{Kind, Record, Value};
//!
//! let mut record = Record::new();
//! record.insert("name", Value::from("Alice"));
//! record.insert("id", Value::from(1));
//!
//! let signature = record.signature();
//! assert_eq!(signature, vec![("id", Kind::Number), ("name", Kind::String)]);
//! ```

use crate::value::{Kind, Value};
use indexmap::IndexMap;

/// An ordered set of named fields.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::{Record, Value};
///
/// let mut record = Record::new();
/// record.insert("first", Value::from(1));
/// record.insert("second", Value::from(2));
///
/// let keys: Vec<_> = record.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field, returning the previous value if the name was taken.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the field names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the field values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the fields, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Field names sorted lexicographically.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.0.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Sorted `(field name, value kind)` pairs describing this record's shape.
    #[must_use]
    pub fn signature(&self) -> Vec<(&str, Kind)> {
        let mut fields: Vec<(&str, Kind)> = self
            .0
            .iter()
            .map(|(name, value)| (name.as_str(), value.kind()))
            .collect();
        fields.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        fields
    }
}

impl From<IndexMap<String, Value>> for Record {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Record(fields)
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Record(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
