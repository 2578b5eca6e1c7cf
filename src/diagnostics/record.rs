//! Validator error records, rendered diagnostics and record loading.

use std::fmt;

use serde::Deserialize;

use super::code::ErrorCode;
use crate::error::SchemaError;

/// One raw error reported by the XSD validator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorRecord {
    /// 1-indexed line number.
    pub line: u32,
    /// 1-indexed column number.
    pub column: u32,
    /// Validator rule identifier.
    pub code: ErrorCode,
    /// Validator phrasing, with tokens in single quotes.
    pub message: String,
}

impl ErrorRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(line: u32, column: u32, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            code,
            message: message.into(),
        }
    }
}

/// A human-readable diagnostic derived from one [`ErrorRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-indexed line number, copied from the record.
    pub line: u32,
    /// 1-indexed column number, copied from the record.
    pub column: u32,
    /// Fully rendered message.
    pub message: String,
}

impl Diagnostic {
    /// Renders the diagnostic as a single report line,
    /// `Line <line>: <message>`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Loads validator error records from a YAML sequence.
///
/// Each entry is a mapping with `line`, `column`, `code` and `message`;
/// unknown keys are rejected and line/column must both be at least 1.
///
/// # Errors
///
/// Returns [`SchemaError::Deserialize`] when the YAML is malformed or does
/// not match the record shape (including non-numeric codes), and
/// [`SchemaError::InvalidRecord`] when a record carries a zero line or
/// column.
///
/// # Examples
///
///     use mjml_xsd::diagnostics::load_error_records;
///
///     let yaml = r#"
///     - line: 3
///       column: 5
///       code: "1866"
///       message: "Attribute 'href' is not allowed on element 'mj-text'"
///     "#;
///     let records = load_error_records(yaml).unwrap();
///     assert_eq!(records.len(), 1);
pub fn load_error_records(input: &str) -> Result<Vec<ErrorRecord>, SchemaError> {
    let records: Vec<ErrorRecord> =
        serde_saphyr::from_str(input).map_err(|error| SchemaError::Deserialize {
            message: first_line(&error.to_string()),
        })?;

    for (i, record) in records.iter().enumerate() {
        validate_record(i + 1, record)?;
    }

    Ok(records)
}

fn validate_record(index: usize, record: &ErrorRecord) -> Result<(), SchemaError> {
    if record.line == 0 {
        return Err(SchemaError::InvalidRecord {
            index,
            reason: "line must be a positive integer (>= 1)".to_owned(),
        });
    }
    if record.column == 0 {
        return Err(SchemaError::InvalidRecord {
            index,
            reason: "column must be a positive integer (>= 1)".to_owned(),
        });
    }
    Ok(())
}

fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or(message).to_owned()
}
