//! Validator error records and their translation into diagnostics.
//!
//! The validator reports `(line, column, code, message)` tuples whose
//! phrasing is tied to the validator implementation. [`ErrorTranslator`]
//! rewrites the codes it knows into stable MJML-oriented messages, drops
//! the codes listed in [`SKIP_CODES`], and passes everything else through
//! a fallback message that preserves the raw code and text.

mod code;
mod record;
mod rules;
mod translator;

pub use code::ErrorCode;
pub use record::{Diagnostic, ErrorRecord, load_error_records};
pub use rules::{ErrorRule, SKIP_CODES, is_skipped, rule_for, rules};
pub use translator::ErrorTranslator;
