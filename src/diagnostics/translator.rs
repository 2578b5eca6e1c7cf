//! Translation of raw validator records into report diagnostics.

use tracing::debug;

use super::record::{Diagnostic, ErrorRecord};
use super::rules::{is_skipped, rule_for};

/// Rewrites a fixed sequence of validator records into human-readable
/// diagnostics.
///
/// # Examples
///
///     use mjml_xsd::diagnostics::{ErrorCode, ErrorRecord, ErrorTranslator};
///
///     let translator = ErrorTranslator::new(vec![ErrorRecord::new(
///         3,
///         5,
///         ErrorCode::new("1866").unwrap(),
///         "Attribute 'href' is not allowed on element 'mj-text'",
///     )]);
///     assert_eq!(
///         translator.messages(),
///         r#"Line 3: Tag "href" has no attribute "mj-text""#,
///     );
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTranslator {
    records: Vec<ErrorRecord>,
}

impl ErrorTranslator {
    /// Creates a translator over `records`, kept in the given order.
    #[must_use]
    pub const fn new(records: Vec<ErrorRecord>) -> Self {
        Self { records }
    }

    /// The records this translator was built from.
    #[must_use]
    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    /// Translates one record.
    ///
    /// Single quotes in the message become double quotes before the
    /// code's rule extracts its tokens. Unknown codes, and known codes
    /// whose pattern finds nothing, fall back to [`Self::default_error`].
    #[must_use]
    pub fn format(record: &ErrorRecord) -> Diagnostic {
        let Some(rule) = rule_for(record.code.as_str()) else {
            debug!(code = %record.code, line = record.line, "no rule for validator code");
            return Self::default_error(record);
        };

        let cleaned = record.message.replace('\'', "\"");
        let tokens = rule.extract(&cleaned);
        if tokens.is_empty() {
            debug!(
                code = %record.code,
                line = record.line,
                "rule pattern matched no tokens"
            );
            return Self::default_error(record);
        }

        Diagnostic {
            line: record.line,
            column: record.column,
            message: rule.render(&tokens),
        }
    }

    /// The fallback diagnostic for records no rule can phrase. Carries
    /// the raw code and message so the report stays actionable.
    #[must_use]
    pub fn default_error(record: &ErrorRecord) -> Diagnostic {
        Diagnostic {
            line: record.line,
            column: record.column,
            message: format!(
                "Uknown MJML error, please open an issue on github.com/mjmlio/mjml with code: {} and message: {}",
                record.code, record.message
            ),
        }
    }

    /// Translates every record whose code is not skipped, in input order.
    #[must_use]
    pub fn errors(&self) -> Vec<Diagnostic> {
        self.records
            .iter()
            .filter(|record| {
                let skipped = is_skipped(record.code.as_str());
                if skipped {
                    debug!(code = %record.code, line = record.line, "skipping tolerated validator code");
                }
                !skipped
            })
            .map(Self::format)
            .collect()
    }

    /// Joins [`Self::errors`] into one report, one `Line <n>: <message>`
    /// per diagnostic, newline separated.
    #[must_use]
    pub fn messages(&self) -> String {
        self.errors()
            .iter()
            .map(Diagnostic::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<ErrorRecord> for ErrorTranslator {
    fn from_iter<I: IntoIterator<Item = ErrorRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "translator_tests.rs"]
mod tests;
