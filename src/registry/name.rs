//! Validated component tag names.
//!
//! Tag names are emitted unescaped into `name="…"` and `type="…"`
//! attributes of the generated schema, so they are restricted to the
//! ASCII subset of XML names: a letter or `_` followed by letters, digits,
//! `-`, `_` or `.`.

use std::borrow::Borrow;
use std::fmt;

use serde::Deserialize;
use serde::de;

use crate::error::SchemaError;

/// A validated MJML component tag name such as `mj-column`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(String);

impl TagName {
    /// Creates a new `TagName` after validating the input.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidTagName`] if the string is empty or
    /// contains characters outside the accepted name alphabet.
    ///
    /// # Examples
    ///
    ///     use mjml_xsd::registry::TagName;
    ///
    ///     assert!(TagName::new("mj-section").is_ok());
    ///     assert!(TagName::new("9lives").is_err());
    pub fn new(s: impl Into<String>) -> Result<Self, SchemaError> {
        let s = s.into();
        validate_tag_name(&s)?;
        Ok(Self(s))
    }

    /// Returns the inner string as a slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for TagName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Borrow<str> for TagName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TagName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        validate_tag_name(&s).map_err(de::Error::custom)?;
        Ok(Self(s))
    }
}

fn validate_tag_name(s: &str) -> Result<(), SchemaError> {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Err(SchemaError::InvalidTagName {
            tag: s.to_owned(),
            reason: "tag name must not be empty".to_owned(),
        });
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(SchemaError::InvalidTagName {
            tag: s.to_owned(),
            reason: "must start with an ASCII letter or underscore".to_owned(),
        });
    }

    if !chars.all(is_name_char) {
        return Err(SchemaError::InvalidTagName {
            tag: s.to_owned(),
            reason: concat!(
                "may only contain ASCII letters, digits, ",
                "'-', '_' and '.'"
            )
            .to_owned(),
        });
    }

    Ok(())
}

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}
