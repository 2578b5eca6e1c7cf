//! Error types for identifier construction and validator output loading.
//!
//! Fragment generation and diagnostic translation never fail; only the
//! boundaries where external text becomes typed values do.

/// Errors that can occur when building typed identifiers or loading
/// validator error records.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A component tag name failed lexical validation.
    #[error("invalid tag name '{tag}': {reason}")]
    InvalidTagName {
        /// The tag name that failed validation.
        tag: String,
        /// A human-readable explanation of why the tag name is invalid.
        reason: String,
    },

    /// A validator error code was not a string of ASCII digits.
    #[error("invalid error code '{code}': {reason}")]
    InvalidErrorCode {
        /// The code that failed validation.
        code: String,
        /// A human-readable explanation of why the code is invalid.
        reason: String,
    },

    /// YAML deserialization of validator output failed.
    #[error("YAML deserialization failed: {message}")]
    Deserialize {
        /// The first line of the parser's error message.
        message: String,
    },

    /// A deserialized error record violated a structural constraint.
    #[error("invalid error record {index}: {reason}")]
    InvalidRecord {
        /// 1-based position of the record in the loaded sequence.
        index: usize,
        /// A human-readable explanation of the violation.
        reason: String,
    },
}
