//! Snowflake identifiers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use patchwire_presence::{DecodeError, EncodeError, FieldPath, FieldValue};
use serde_json::Value;

/// A 64-bit resource identifier, carried on the wire as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snowflake(pub u64);

/// Milliseconds between the Unix epoch and the first second of 2015.
pub const EPOCH_MS: u64 = 1_420_070_400_000;

impl Snowflake {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Creation time in milliseconds since the Unix epoch.
    pub const fn timestamp_ms(self) -> u64 {
        (self.0 >> 22) + EPOCH_MS
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u64> for Snowflake {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FieldValue for Snowflake {
    const EXPECTED: &'static str = "snowflake string";

    fn encode(&self, _path: &mut FieldPath) -> Result<Value, EncodeError> {
        Ok(Value::String(self.to_string()))
    }

    fn decode(value: Value, path: &mut FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::String(text) => text
                .parse()
                .map_err(|err| DecodeError::invalid(path, format!("invalid snowflake {text:?}: {err}"))),
            other => Err(DecodeError::shape(path, Self::EXPECTED, &other)),
        }
    }
}
