//! Per-field reading handle passed to [`Record::read_field`](super::Record::read_field).

use serde_json::Value;

use crate::error::DecodeError;
use crate::field::FieldValue;
use crate::optional::Optional;
use crate::path::FieldPath;

/// A present input field, positioned at its path.
pub struct FieldReader<'a> {
    value: Value,
    path: &'a mut FieldPath,
}

impl<'a> FieldReader<'a> {
    pub fn new(value: Value, path: &'a mut FieldPath) -> Self {
        Self { value, path }
    }

    pub fn path(&self) -> &FieldPath {
        &*self.path
    }

    /// Reads a non-nullable field. A `null` goes to the element codec, which
    /// rejects it unless the element itself is nullable (`Option<T>`).
    pub fn value<T: FieldValue>(self) -> Result<Optional<T>, DecodeError> {
        T::decode(self.value, self.path).map(Optional::Value)
    }

    /// Reads a nullable field. A `null` yields [`Optional::Null`], also for
    /// `Option<T>` elements, so `Value(None)` reads back as `Null`.
    pub fn nullable<T: FieldValue>(self) -> Result<Optional<T>, DecodeError> {
        if self.value.is_null() {
            return Ok(Optional::Null);
        }
        T::decode(self.value, self.path).map(Optional::Value)
    }
}
