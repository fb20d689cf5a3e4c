//! Ordered JSON object builder that honours presence.

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::EncodeError;
use crate::field::FieldValue;
use crate::optional::Optional;
use crate::path::FieldPath;

enum PathSlot<'a> {
    Owned(FieldPath),
    Borrowed(&'a mut FieldPath),
}

impl PathSlot<'_> {
    fn get(&mut self) -> &mut FieldPath {
        match self {
            Self::Owned(path) => path,
            Self::Borrowed(path) => &mut **path,
        }
    }
}

/// Builds a JSON object field by field, in call order.
///
/// Unset containers produce no key at all; null containers produce an
/// explicit `null`.
///
/// ```
/// use patchwire_presence::{ObjectWriter, Optional};
///
/// let topic: Optional<String> = Optional::Unset;
/// let privacy: Optional<u8> = Optional::Value(2);
///
/// let mut body = ObjectWriter::new();
/// body.required("channel_id", &"1234".to_owned())?
///     .field("topic", &topic)?
///     .field("privacy_level", &privacy)?;
/// assert_eq!(body.finish().to_string(), r#"{"channel_id":"1234","privacy_level":2}"#);
/// # Ok::<(), patchwire_presence::EncodeError>(())
/// ```
pub struct ObjectWriter<'a> {
    out: Map<String, Value>,
    path: PathSlot<'a>,
}

impl Default for ObjectWriter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectWriter<'static> {
    /// A writer for a top-level object.
    pub fn new() -> Self {
        Self {
            out: Map::new(),
            path: PathSlot::Owned(FieldPath::root()),
        }
    }
}

impl<'a> ObjectWriter<'a> {
    /// A writer for an object nested at `path`.
    pub fn nested(path: &'a mut FieldPath) -> Self {
        Self {
            out: Map::new(),
            path: PathSlot::Borrowed(path),
        }
    }

    /// Writes `name` unless `value` is unset.
    pub fn field<T: FieldValue>(
        &mut self,
        name: &str,
        value: &Optional<T>,
    ) -> Result<&mut Self, EncodeError> {
        match value {
            Optional::Unset => {
                trace!(field = name, "omitting unset field");
            }
            Optional::Null => {
                self.out.insert(name.to_owned(), Value::Null);
            }
            Optional::Value(v) => {
                self.required(name, v)?;
            }
        }
        Ok(self)
    }

    /// Writes `name` unconditionally.
    pub fn required<T: FieldValue>(&mut self, name: &str, value: &T) -> Result<&mut Self, EncodeError> {
        let path = self.path.get();
        path.push_key(name);
        let encoded = value.encode(path)?;
        path.pop();
        self.out.insert(name.to_owned(), encoded);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.out
    }

    pub fn finish(self) -> Value {
        Value::Object(self.out)
    }
}
