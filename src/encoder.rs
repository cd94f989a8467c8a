//! The TOON encoder.
//!
//! [`Encoder`] walks a [`Value`] once. A primitive root is written with the
//! primitive rules; a sequence root is classified by
//! [`classify`](crate::classify::classify) and written with the layout of
//! its shape. Output accumulates in a buffer owned by the encoder and is
//! only handed out once encoding succeeds.
//!
//! ```rust
//! use toon_encoder::{encode, toon};
//!
//! assert_eq!(encode(&toon!([1, 2, 3])).unwrap(), "items[3]: 1,2,3");
//! assert_eq!(encode(&toon!([[1, 2], [3, 4]])).unwrap(), "items[2]:\n  - 1,2\n  - 3,4\n");
//! assert_eq!(
//!     encode(&toon!([{"id": 1, "name": "Ada"}, {"id": 2, "name": "Bob"}])).unwrap(),
//!     "items[2]{id, name}:\n  1,Ada\n  2,Bob\n"
//! );
//! ```

use crate::classify::{classify, Shape};
use crate::error::{Error, Result};
use crate::header::{write_header, write_indent};
use crate::options::ToonOptions;
use crate::primitive::write_primitive;
use crate::value::Value;

static NULL: Value = Value::Null;

/// Writes TOON text for one value into an owned buffer.
pub struct Encoder<'o> {
    output: String,
    options: &'o ToonOptions,
}

impl<'o> Encoder<'o> {
    pub fn new(options: &'o ToonOptions) -> Self {
        Encoder {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Encodes `value` as the document root.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedType`] for a record root, plus any error from
    /// sequence classification.
    pub fn encode_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Array(items) => self.encode_sequence(items),
            Value::Object(_) => Err(Error::unsupported_type(
                "record outside a uniform record array",
            )),
            primitive => {
                self.write_primitive(primitive)?;
                Ok(())
            }
        }
    }

    fn encode_sequence(&mut self, items: &[Value]) -> Result<()> {
        let shape = classify(items)?;
        tracing::trace!(len = items.len(), ?shape, "classified sequence");

        let options: &'o ToonOptions = self.options;
        let key = options.key.as_str();
        match shape {
            Shape::Empty => {
                write_header(&mut self.output, key, 0, None, options);
            }
            Shape::Primitives => {
                write_header(&mut self.output, key, items.len(), None, options);
                self.output.push(' ');
                self.write_joined(items.iter())?;
            }
            Shape::Rows => {
                write_header(&mut self.output, key, items.len(), None, options);
                self.output.push('\n');
                for item in items {
                    let row = item.as_array().unwrap_or_default();
                    write_indent(&mut self.output, 1);
                    self.output.push_str("- ");
                    self.write_joined(row.iter())?;
                    self.output.push('\n');
                }
            }
            Shape::Records(fields) => {
                write_header(
                    &mut self.output,
                    key,
                    items.len(),
                    Some(fields.as_slice()),
                    options,
                );
                self.output.push('\n');
                for item in items {
                    let record = item
                        .as_object()
                        .ok_or_else(|| Error::unsupported_shape("non-record in record array"))?;
                    if !fields.is_empty() {
                        write_indent(&mut self.output, 1);
                        self.write_joined(
                            fields
                                .iter()
                                .map(|name| record.get(name).unwrap_or(&NULL)),
                        )?;
                    }
                    self.output.push('\n');
                }
            }
        }
        Ok(())
    }

    /// Writes primitives separated by the active delimiter.
    fn write_joined<'v>(&mut self, values: impl Iterator<Item = &'v Value>) -> Result<()> {
        let delimiter = self.options.delimiter.as_str();
        for (i, value) in values.enumerate() {
            if i > 0 {
                self.output.push_str(delimiter);
            }
            self.write_primitive(value)?;
        }
        Ok(())
    }

    fn write_primitive(&mut self, value: &Value) -> Result<()> {
        if write_primitive(&mut self.output, value, self.options.delimiter) {
            Ok(())
        } else {
            Err(Error::UnsupportedShape(format!(
                "{} where a primitive was expected",
                value.kind()
            )))
        }
    }
}

/// Encodes a [`Value`] with default options.
///
/// # Errors
///
/// See [`encode_with_options`].
pub fn encode(value: &Value) -> Result<String> {
    encode_with_options(value, &ToonOptions::default())
}

/// Encodes a [`Value`] into a TOON string.
///
/// # Errors
///
/// - [`Error::UnsupportedType`] if the root is a record.
/// - [`Error::HeterogeneousCollection`] if a record array has mismatched fields.
/// - [`Error::UnsupportedShape`] if a sequence mixes shapes or nests too deeply.
pub fn encode_with_options(value: &Value, options: &ToonOptions) -> Result<String> {
    let mut encoder = Encoder::new(options);
    match encoder.encode_value(value) {
        Ok(()) => Ok(encoder.into_inner()),
        Err(err) => {
            tracing::debug!(error = %err, kind = %value.kind(), "encoding failed");
            Err(err)
        }
    }
}
