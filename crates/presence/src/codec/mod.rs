//! Presence-aware codec.
//!
//! A [`Record`] is a field-descriptor table: it names its fields in
//! declaration order and routes each one to an element codec. The walkers in
//! this module handle omission of unset fields and explicit nulls; unknown
//! input keys are skipped and failures carry the field path.

mod reader;
mod writer;

pub use reader::FieldReader;
pub use writer::ObjectWriter;

use serde_json::Value;
use tracing::trace;

use crate::error::{DecodeError, EncodeError};
use crate::field::FieldValue;
use crate::path::FieldPath;

/// A structured resource whose fields are all presence containers.
///
/// Usually implemented by the [`record!`](crate::record) macro.
pub trait Record: Default {
    /// Type name, used in diagnostics.
    const NAME: &'static str;
    /// Wire names in declaration order.
    const FIELDS: &'static [&'static str];

    /// Writes every field, in declaration order, through `out`.
    fn write_fields(&self, out: &mut ObjectWriter<'_>) -> Result<(), EncodeError>;

    /// Reads one present input field. Returns `false` if `name` is not declared.
    fn read_field(&mut self, name: &str, reader: FieldReader<'_>) -> Result<bool, DecodeError>;
}

pub fn encode_record<R: Record>(record: &R, path: &mut FieldPath) -> Result<Value, EncodeError> {
    let mut out = ObjectWriter::nested(path);
    record.write_fields(&mut out)?;
    Ok(out.finish())
}

pub fn decode_record<R: Record>(value: Value, path: &mut FieldPath) -> Result<R, DecodeError> {
    let entries = match value {
        Value::Object(entries) => entries,
        other => return Err(DecodeError::shape(path, "object", &other)),
    };
    let mut record = R::default();
    for (name, value) in entries {
        path.push_key(name.as_str());
        let known = record.read_field(&name, FieldReader::new(value, path))?;
        path.pop();
        if !known {
            trace!(record = R::NAME, field = %name, "ignoring unknown field");
        }
    }
    Ok(record)
}

pub fn to_value<T: FieldValue>(value: &T) -> Result<Value, EncodeError> {
    value.encode(&mut FieldPath::root())
}

pub fn to_string<T: FieldValue>(value: &T) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(&to_value(value)?)?)
}

pub fn to_vec<T: FieldValue>(value: &T) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(&to_value(value)?)?)
}

pub fn from_value<T: FieldValue>(value: Value) -> Result<T, DecodeError> {
    T::decode(value, &mut FieldPath::root())
}

pub fn from_str<T: FieldValue>(text: &str) -> Result<T, DecodeError> {
    from_value(serde_json::from_str(text)?)
}

pub fn from_slice<T: FieldValue>(bytes: &[u8]) -> Result<T, DecodeError> {
    from_value(serde_json::from_slice(bytes)?)
}
