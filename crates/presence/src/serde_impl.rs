//! Bridges to plain `serde` types.
//!
//! `Optional<T>` works as a field of any `#[derive(Serialize, Deserialize)]`
//! struct when annotated with
//! `#[serde(default, skip_serializing_if = "Optional::is_unset")]`.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec;
use crate::error::DecodeError;
use crate::field::FieldValue;
use crate::optional::Optional;
use crate::path::FieldPath;

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Unset => Err(S::Error::custom(
                "unset optional reached the serializer; skip it with `Optional::is_unset`",
            )),
            Optional::Null => serializer.serialize_none(),
            Optional::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from_nullable)
    }
}

/// `Serialize` for any element codec, used by the declaration macros.
pub fn serialize<T: FieldValue, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    codec::to_value(value)
        .map_err(S::Error::custom)?
        .serialize(serializer)
}

/// `Deserialize` for any element codec, used by the declaration macros.
///
/// serde does not expose the enclosing document's position, so failure paths
/// are relative to the decoded value: a bad `d.text` reports `$.text`.
pub fn deserialize<'de, T: FieldValue, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
    let value = Value::deserialize(deserializer)?;
    codec::from_value(value).map_err(D::Error::custom)
}

/// Decodes a name-discriminated enumeration.
pub fn decode_name<E>(
    value: Value,
    path: &FieldPath,
    expected: &'static str,
    kind: &'static str,
    lookup: fn(&str) -> Option<E>,
) -> Result<E, DecodeError> {
    match value {
        Value::String(name) => lookup(&name).ok_or_else(|| DecodeError::UnknownVariant {
            path: path.clone(),
            kind,
            value: format!("{name:?}"),
        }),
        other => Err(DecodeError::shape(path, expected, &other)),
    }
}

/// Decodes an integer-discriminated enumeration.
pub fn decode_discriminant<E>(
    value: Value,
    path: &FieldPath,
    expected: &'static str,
    kind: &'static str,
    lookup: fn(i64) -> Option<E>,
) -> Result<E, DecodeError> {
    let Some(n) = value.as_i64() else {
        return Err(DecodeError::shape(path, expected, &value));
    };
    lookup(n).ok_or_else(|| DecodeError::UnknownVariant {
        path: path.clone(),
        kind,
        value: n.to_string(),
    })
}
