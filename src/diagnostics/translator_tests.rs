//! Unit tests for record translation.

use rstest::*;

use super::*;
use crate::diagnostics::ErrorCode;

fn record(line: u32, code: &str, message: &str) -> ErrorRecord {
    ErrorRecord::new(
        line,
        1,
        ErrorCode::new(code).expect("test codes are valid"),
        message,
    )
}

#[fixture]
fn translator() -> ErrorTranslator {
    [
        record(
            2,
            "1843",
            "Element 'mj-section': Character content other than whitespace is not allowed because the content type is 'element-only'.",
        ),
        record(4, "1824", "Element 'mj-body': Character content is not allowed."),
        record(
            7,
            "1866",
            "Element 'mj-button', attribute 'hreff': The attribute 'hreff' is not allowed.",
        ),
        record(9, "9999", "Something the rule table has never seen"),
        record(
            11,
            "1871",
            "Element 'mj-image': This element is not expected. Expected is ( mj-column ).",
        ),
    ]
    .into_iter()
    .collect()
}

#[rstest]
fn scenario_attribute_tokens_follow_text_position() {
    let diagnostic = ErrorTranslator::format(&ErrorRecord::new(
        3,
        5,
        ErrorCode::new("1866").expect("valid code"),
        "Attribute 'href' is not allowed on element 'mj-text'",
    ));
    assert_eq!(
        diagnostic,
        Diagnostic {
            line: 3,
            column: 5,
            message: r#"Tag "href" has no attribute "mj-text""#.to_owned(),
        }
    );
}

#[rstest]
fn unknown_code_falls_back_with_raw_details() {
    let raw = record(9, "9999", "Weird 'quoted' text");
    let diagnostic = ErrorTranslator::format(&raw);
    assert!(diagnostic.message.contains("Uknown MJML error"));
    assert!(diagnostic.message.contains("code: 9999"));
    assert!(diagnostic.message.contains("message: Weird 'quoted' text"));
    assert_eq!(diagnostic, ErrorTranslator::default_error(&raw));
}

#[rstest]
fn known_code_without_tokens_falls_back() {
    let raw = record(5, "1843", "no quoted tokens at all");
    assert_eq!(
        ErrorTranslator::format(&raw),
        ErrorTranslator::default_error(&raw)
    );
}

#[rstest]
fn format_is_deterministic(translator: ErrorTranslator) {
    for raw in translator.records() {
        assert_eq!(ErrorTranslator::format(raw), ErrorTranslator::format(raw));
    }
}

#[rstest]
fn errors_drop_skipped_codes_and_keep_order(translator: ErrorTranslator) {
    let lines: Vec<u32> = translator.errors().iter().map(|d| d.line).collect();
    assert_eq!(lines, [2, 7, 9, 11]);
}

#[rstest]
fn errors_render_known_rules(translator: ErrorTranslator) {
    let messages: Vec<String> = translator
        .errors()
        .into_iter()
        .map(|d| d.message)
        .collect();
    assert_eq!(
        messages.first().map(String::as_str),
        Some(r#"Plain text content inside "mj-section" isn't allowed"#)
    );
    assert_eq!(
        messages.get(1).map(String::as_str),
        Some(r#"Tag "mj-button" has no attribute "hreff""#)
    );
    assert_eq!(
        messages.get(3).map(String::as_str),
        Some(r#"Tag "mj-image" is not allowed here, only "mj-column" are accepted"#)
    );
}

#[rstest]
fn messages_have_one_line_per_error(translator: ErrorTranslator) {
    let report = translator.messages();
    assert_eq!(report.lines().count(), translator.errors().len());
    assert!(!report.ends_with('\n'));
    for line in report.lines() {
        assert!(line.starts_with("Line "), "unexpected line: {line}");
    }
}

#[rstest]
fn empty_translator_reports_nothing() {
    let translator = ErrorTranslator::default();
    assert!(translator.errors().is_empty());
    assert_eq!(translator.messages(), "");
}

#[rstest]
fn only_skipped_records_report_nothing() {
    let translator: ErrorTranslator = [record(1, "1824", "a"), record(2, "1824", "b")]
        .into_iter()
        .collect();
    assert_eq!(translator.messages(), "");
}
