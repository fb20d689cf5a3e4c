//! Element codecs: how a single field value maps to and from JSON.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};

use crate::error::{DecodeError, EncodeError};
use crate::path::FieldPath;

/// Reads and writes one element type.
///
/// Resource definitions supply this for every type they place inside an
/// [`Optional`](crate::Optional). `path` is the location of the value being
/// processed and is only used to report failures.
pub trait FieldValue: Sized {
    /// Shape name reported when the input does not match.
    const EXPECTED: &'static str;

    fn encode(&self, path: &mut FieldPath) -> Result<Value, EncodeError>;

    fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError>;
}

impl FieldValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn encode(&self, _path: &mut FieldPath) -> Result<Value, EncodeError> {
        Ok(Value::Bool(*self))
    }

    fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
        value
            .as_bool()
            .ok_or_else(|| DecodeError::shape(path, Self::EXPECTED, &value))
    }
}

impl FieldValue for String {
    const EXPECTED: &'static str = "string";

    fn encode(&self, _path: &mut FieldPath) -> Result<Value, EncodeError> {
        Ok(Value::String(self.clone()))
    }

    fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(DecodeError::shape(path, Self::EXPECTED, &other)),
        }
    }
}

impl FieldValue for Value {
    const EXPECTED: &'static str = "JSON value";

    fn encode(&self, _path: &mut FieldPath) -> Result<Value, EncodeError> {
        Ok(self.clone())
    }

    fn decode(value: Value, _path: &mut FieldPath) -> Result<Self, DecodeError> {
        Ok(value)
    }
}

macro_rules! signed_field_value {
    ($($ty:ty => $expected:literal),* $(,)?) => {$(
        impl FieldValue for $ty {
            const EXPECTED: &'static str = $expected;

            fn encode(&self, _path: &mut FieldPath) -> Result<Value, EncodeError> {
                Ok(Value::Number(Number::from(*self)))
            }

            fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
                value
                    .as_i64()
                    .and_then(|n| <$ty>::try_from(n).ok())
                    .ok_or_else(|| DecodeError::shape(path, Self::EXPECTED, &value))
            }
        }
    )*};
}

macro_rules! unsigned_field_value {
    ($($ty:ty => $expected:literal),* $(,)?) => {$(
        impl FieldValue for $ty {
            const EXPECTED: &'static str = $expected;

            fn encode(&self, _path: &mut FieldPath) -> Result<Value, EncodeError> {
                Ok(Value::Number(Number::from(*self)))
            }

            fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
                value
                    .as_u64()
                    .and_then(|n| <$ty>::try_from(n).ok())
                    .ok_or_else(|| DecodeError::shape(path, Self::EXPECTED, &value))
            }
        }
    )*};
}

signed_field_value! {
    i8 => "8-bit integer",
    i16 => "16-bit integer",
    i32 => "32-bit integer",
    i64 => "64-bit integer",
}

unsigned_field_value! {
    u8 => "8-bit unsigned integer",
    u16 => "16-bit unsigned integer",
    u32 => "32-bit unsigned integer",
    u64 => "64-bit unsigned integer",
}

impl FieldValue for f64 {
    const EXPECTED: &'static str = "number";

    fn encode(&self, path: &mut FieldPath) -> Result<Value, EncodeError> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| EncodeError::NonFinite { path: path.clone() })
    }

    fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
        value
            .as_f64()
            .ok_or_else(|| DecodeError::shape(path, Self::EXPECTED, &value))
    }
}

impl FieldValue for f32 {
    const EXPECTED: &'static str = "number";

    fn encode(&self, path: &mut FieldPath) -> Result<Value, EncodeError> {
        f64::from(*self).encode(path)
    }

    fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
        let n = f64::decode(value, path)?;
        let narrowed = n as f32;
        if narrowed.is_infinite() {
            return Err(DecodeError::Shape {
                path: path.clone(),
                expected: Self::EXPECTED,
                actual: format!("number {n} outside 32-bit float range"),
            });
        }
        Ok(narrowed)
    }
}

impl FieldValue for DateTime<FixedOffset> {
    const EXPECTED: &'static str = "RFC 3339 timestamp";

    fn encode(&self, _path: &mut FieldPath) -> Result<Value, EncodeError> {
        Ok(Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, false)))
    }

    fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
        let text = String::decode(value, path).map_err(|err| match err {
            DecodeError::Shape { path, actual, .. } => DecodeError::Shape {
                path,
                expected: Self::EXPECTED,
                actual,
            },
            other => other,
        })?;
        DateTime::parse_from_rfc3339(&text)
            .map_err(|err| DecodeError::invalid(path, format!("invalid timestamp {text:?}: {err}")))
    }
}

impl FieldValue for DateTime<Utc> {
    const EXPECTED: &'static str = "RFC 3339 timestamp";

    fn encode(&self, path: &mut FieldPath) -> Result<Value, EncodeError> {
        self.fixed_offset().encode(path)
    }

    fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
        DateTime::<FixedOffset>::decode(value, path).map(|t| t.with_timezone(&Utc))
    }
}

/// A nullable element, e.g. a `null` inside an array.
impl<T: FieldValue> FieldValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn encode(&self, path: &mut FieldPath) -> Result<Value, EncodeError> {
        match self {
            Some(v) => v.encode(path),
            None => Ok(Value::Null),
        }
    }

    fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(None),
            other => T::decode(other, path).map(Some),
        }
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn encode(&self, path: &mut FieldPath) -> Result<Value, EncodeError> {
        (**self).encode(path)
    }

    fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
        T::decode(value, path).map(Box::new)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn encode(&self, path: &mut FieldPath) -> Result<Value, EncodeError> {
        let mut out = Vec::with_capacity(self.len());
        for (i, item) in self.iter().enumerate() {
            path.push_index(i);
            out.push(item.encode(path)?);
            path.pop();
        }
        Ok(Value::Array(out))
    }

    fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(DecodeError::shape(path, Self::EXPECTED, &other)),
        };
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            path.push_index(i);
            out.push(T::decode(item, path)?);
            path.pop();
        }
        Ok(out)
    }
}

impl<T: FieldValue> FieldValue for BTreeMap<String, T> {
    const EXPECTED: &'static str = "object";

    fn encode(&self, path: &mut FieldPath) -> Result<Value, EncodeError> {
        let mut out = Map::with_capacity(self.len());
        for (key, item) in self {
            path.push_key(key.as_str());
            out.insert(key.clone(), item.encode(path)?);
            path.pop();
        }
        Ok(Value::Object(out))
    }

    fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
        let entries = match value {
            Value::Object(entries) => entries,
            other => return Err(DecodeError::shape(path, Self::EXPECTED, &other)),
        };
        let mut out = BTreeMap::new();
        for (key, item) in entries {
            path.push_key(key.as_str());
            let decoded = T::decode(item, path)?;
            path.pop();
            out.insert(key, decoded);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode<T: FieldValue>(value: Value) -> Result<T, DecodeError> {
        T::decode(value, &mut FieldPath::root())
    }

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(decode::<u8>(json!(255)).unwrap(), 255);
        let err = decode::<u8>(json!(256)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "at $: expected 8-bit unsigned integer, found number 256"
        );
        assert!(decode::<u32>(json!(-1)).is_err());
        assert_eq!(decode::<i16>(json!(-300)).unwrap(), -300);
        assert!(decode::<i64>(json!(1.5)).is_err());
    }

    #[test]
    fn f32_rejects_numbers_outside_its_range() {
        assert_eq!(decode::<f32>(json!(1.5)).unwrap(), 1.5);
        assert_eq!(decode::<f32>(json!(-3.0e38)).unwrap(), -3.0e38);
        let err = decode::<f32>(json!(1e300)).unwrap_err();
        assert!(matches!(err, DecodeError::Shape { expected: "number", .. }));
        assert!(decode::<f32>(json!(-1e39)).is_err());
    }

    #[test]
    fn floats_reject_non_finite_on_encode() {
        let mut path = FieldPath::root();
        path.push_key("ratio");
        let err = f64::NAN.encode(&mut path).unwrap_err();
        assert_eq!(
            err.to_string(),
            "at $.ratio: non-finite number cannot be represented in JSON"
        );
        assert_eq!(1.5f64.encode(&mut path).unwrap(), json!(1.5));
    }

    #[test]
    fn vec_error_reports_element_index() {
        let err = decode::<Vec<String>>(json!(["a", "b", 3])).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "$[2]");
    }

    #[test]
    fn nullable_elements_in_collections() {
        let v = decode::<Vec<Option<u32>>>(json!([1, null, 3])).unwrap();
        assert_eq!(v, vec![Some(1), None, Some(3)]);
        assert_eq!(v.encode(&mut FieldPath::root()).unwrap(), json!([1, null, 3]));
    }

    #[test]
    fn map_error_reports_key() {
        let err = decode::<BTreeMap<String, bool>>(json!({"ok": true, "bad": 1})).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "$.bad");
    }

    #[test]
    fn timestamps_round_trip() {
        let t = decode::<DateTime<FixedOffset>>(json!("2021-06-01T12:30:00+02:00")).unwrap();
        assert_eq!(
            t.encode(&mut FieldPath::root()).unwrap(),
            json!("2021-06-01T12:30:00+02:00")
        );

        let utc = decode::<DateTime<Utc>>(json!("2021-06-01T12:30:00+02:00")).unwrap();
        assert_eq!(
            utc.encode(&mut FieldPath::root()).unwrap(),
            json!("2021-06-01T10:30:00+00:00")
        );
    }

    #[test]
    fn timestamp_failures_are_typed() {
        let shape = decode::<DateTime<Utc>>(json!(5)).unwrap_err();
        assert!(matches!(
            shape,
            DecodeError::Shape { expected: "RFC 3339 timestamp", .. }
        ));
        let invalid = decode::<DateTime<Utc>>(json!("yesterday")).unwrap_err();
        assert!(matches!(invalid, DecodeError::Invalid { .. }));
    }
}
