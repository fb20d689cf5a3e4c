//! The tri-state presence container.

use crate::error::UnsetReadError;

/// A field value that remembers whether it was ever assigned.
///
/// * `Unset`: never assigned; omitted from encoded output.
/// * `Null`: explicitly assigned null; encoded as a JSON `null`.
/// * `Value(v)`: assigned a concrete value.
///
/// Nullability lives in this enum, never in `T`: an optional-of-optional
/// cannot be expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    #[default]
    Unset,
    Null,
    Value(T),
}

impl<T> Optional<T> {
    pub const fn unset() -> Self {
        Self::Unset
    }

    /// Set-to-value for `Some`, set-to-null for `None`.
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }

    /// True for both `Null` and `Value`.
    pub const fn has_value(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// `None` when unset; otherwise `Some` of the stored, possibly null, value.
    pub fn try_get(&self) -> Option<Option<&T>> {
        match self {
            Self::Unset => None,
            Self::Null => Some(None),
            Self::Value(v) => Some(Some(v)),
        }
    }

    /// Reads the stored value, failing on an unset container.
    pub fn value(&self) -> Result<Option<&T>, UnsetReadError> {
        self.try_get().ok_or(UnsetReadError)
    }

    /// Consumes the container and returns the stored, possibly null, value.
    ///
    /// # Panics
    ///
    /// Panics if the container is unset.
    #[track_caller]
    pub fn unwrap(self) -> Option<T> {
        match self.into_nullable() {
            Some(v) => v,
            None => panic!("{}", UnsetReadError),
        }
    }

    pub fn into_nullable(self) -> Option<Option<T>> {
        match self {
            Self::Unset => None,
            Self::Null => Some(None),
            Self::Value(v) => Some(Some(v)),
        }
    }

    /// Returns the concrete value, treating both unset and null as absent.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Unset => Optional::Unset,
            Self::Null => Optional::Null,
            Self::Value(v) => Optional::Value(v),
        }
    }

    /// Maps the contained value, preserving unset and null.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Self::Unset => Optional::Unset,
            Self::Null => Optional::Null,
            Self::Value(v) => Optional::Value(f(v)),
        }
    }

    /// Fallible map; the error short-circuits, unset and null pass through.
    pub fn try_map<U, E, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<Optional<U>, E> {
        Ok(match self {
            Self::Unset => Optional::Unset,
            Self::Null => Optional::Null,
            Self::Value(v) => Optional::Value(f(v)?),
        })
    }

    /// Returns `self` if it has a value (including null), otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        if self.has_value() {
            self
        } else {
            other
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}
