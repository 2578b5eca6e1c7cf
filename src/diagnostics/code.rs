//! Validator error codes.

use std::fmt;

use serde::Deserialize;
use serde::de::{self, Visitor};

use crate::error::SchemaError;

/// A numeric validator rule identifier, kept as its decimal text.
///
/// Codes are compared as strings so they can be matched directly
/// against the rule table and the skip list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCode(String);

impl ErrorCode {
    /// Creates a new `ErrorCode` after checking it is a non-empty run of
    /// ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidErrorCode`] otherwise.
    pub fn new(s: impl Into<String>) -> Result<Self, SchemaError> {
        let s = s.into();
        validate_code(&s)?;
        Ok(Self(s))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        Self(code.to_string())
    }
}

impl PartialEq<&str> for ErrorCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for ErrorCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_string(ErrorCodeVisitor)
    }
}

/// Accepts codes written either as quoted strings or bare integers.
struct ErrorCodeVisitor;

impl Visitor<'_> for ErrorCodeVisitor {
    type Value = ErrorCode;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a numeric validator error code")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        ErrorCode::new(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ErrorCode(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        ErrorCode::new(v.to_string()).map_err(E::custom)
    }
}

fn validate_code(s: &str) -> Result<(), SchemaError> {
    if s.is_empty() {
        return Err(SchemaError::InvalidErrorCode {
            code: s.to_owned(),
            reason: "code must not be empty".to_owned(),
        });
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SchemaError::InvalidErrorCode {
            code: s.to_owned(),
            reason: "code must contain only ASCII digits".to_owned(),
        });
    }
    Ok(())
}
