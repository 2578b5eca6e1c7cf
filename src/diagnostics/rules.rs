//! The fixed table of validator codes this crate knows how to phrase.
//!
//! Every rule pairs an extraction pattern, whose first capture group
//! yields one token per match, with a template carrying positional
//! placeholders `$0`, `$1`, ….

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// Validator codes dropped from reports. `1824` flags mixed content on
/// structural containers, which MJML tolerates.
pub const SKIP_CODES: &[&str] = &["1824"];

/// Returns `true` if records with `code` are dropped from reports.
#[must_use]
pub fn is_skipped(code: &str) -> bool {
    SKIP_CODES.contains(&code)
}

/// Extraction pattern and message template for one validator code.
#[derive(Debug)]
pub struct ErrorRule {
    pattern: Regex,
    template: &'static str,
}

static RULES: LazyLock<IndexMap<&'static str, ErrorRule>> = LazyLock::new(|| {
    IndexMap::from([
        (
            "1843",
            ErrorRule::new(r#""(.*?)""#, r#"Plain text content inside "$0" isn't allowed"#),
        ),
        (
            "1840",
            ErrorRule::new(
                r#"[\{|"](.*?)["|\}]"#,
                r#"Tag "$0" doesn't support "$3" value on "$1" attribute, only $4 are accepted"#,
            ),
        ),
        (
            "1866",
            ErrorRule::new(r#""(.*?)""#, r#"Tag "$0" has no attribute "$1""#),
        ),
        (
            "1871",
            ErrorRule::new(
                r#"[\(|"](.*?)["|\)]"#,
                r#"Tag "$0" is not allowed here, only "$1" are accepted"#,
            ),
        ),
    ])
});

/// Looks up the rule for a validator code.
#[must_use]
pub fn rule_for(code: &str) -> Option<&'static ErrorRule> {
    RULES.get(code)
}

/// Iterates the rule table as `(code, rule)` pairs.
#[must_use]
pub fn rules() -> impl Iterator<Item = (&'static str, &'static ErrorRule)> {
    RULES.iter().map(|(code, rule)| (*code, rule))
}

impl ErrorRule {
    #[expect(
        clippy::expect_used,
        reason = "rule patterns are string literals exercised by unit tests"
    )]
    fn new(pattern: &str, template: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("rule pattern should compile"),
            template,
        }
    }

    /// The extraction pattern.
    #[must_use]
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The message template with `$i` placeholders.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        self.template
    }

    /// Collects the trimmed first capture group of every successive,
    /// non-overlapping match in `message`, left to right.
    #[must_use]
    pub fn extract(&self, message: &str) -> Vec<String> {
        self.pattern
            .captures_iter(message)
            .filter_map(|captures| captures.get(1))
            .map(|token| token.as_str().trim().to_owned())
            .collect()
    }

    /// Fills the template with `tokens`.
    ///
    /// Token `i` replaces the first remaining `$i`. Tokens with no
    /// placeholder are dropped; placeholders with no token stay verbatim.
    #[must_use]
    pub fn render<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        tokens
            .iter()
            .enumerate()
            .fold(self.template.to_owned(), |message, (i, token)| {
                message.replacen(&format!("${i}"), token.as_ref(), 1)
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn rule(code: &str) -> &'static ErrorRule {
        rule_for(code).expect("code is in the rule table")
    }

    #[rstest]
    fn table_holds_exactly_four_rules() {
        let codes: Vec<&str> = rules().map(|(code, _)| code).collect();
        assert_eq!(codes, ["1843", "1840", "1866", "1871"]);
    }

    #[rstest]
    #[case::skipped("1824", true)]
    #[case::known("1866", false)]
    #[case::unknown("9999", false)]
    fn skip_list_membership(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(is_skipped(code), expected);
    }

    #[rstest]
    fn quoted_tokens_are_trimmed_in_order() {
        let tokens = rule("1866").extract(r#"Attribute " href " is not allowed on element "mj-text""#);
        assert_eq!(tokens, ["href", "mj-text"]);
    }

    #[rstest]
    fn bracket_pattern_reads_braces_and_quotes() {
        let tokens = rule("1840").extract(concat!(
            r#"Element "mj-column", attribute "direction": [facet "enumeration"] "#,
            r#"The value "up" is not an element of the set {ltr, rtl}."#,
        ));
        assert_eq!(tokens, ["mj-column", "direction", "enumeration", "up", "ltr, rtl"]);
    }

    #[rstest]
    fn bracket_classes_include_literal_pipe() {
        let tokens = rule("1840").extract("value |a| and {b}");
        assert_eq!(tokens, ["a", "b"]);
    }

    #[rstest]
    fn paren_pattern_reads_expected_list() {
        let tokens = rule("1871").extract(
            r#"Element "mj-image": This element is not expected. Expected is one of ( mj-text, mj-button )."#,
        );
        assert_eq!(tokens, ["mj-image", "mj-text, mj-button"]);
    }

    #[rstest]
    fn tokens_do_not_span_lines() {
        assert!(rule("1843").extract("open \" quote\non next line \"").is_empty());
    }

    #[rstest]
    fn render_skips_unreferenced_index() {
        let rendered = rule("1840").render(&["mj-column", "direction", "enumeration", "up", "ltr, rtl"]);
        assert_eq!(
            rendered,
            r#"Tag "mj-column" doesn't support "up" value on "direction" attribute, only ltr, rtl are accepted"#
        );
    }

    #[rstest]
    fn render_leaves_unfilled_placeholders() {
        let rendered = rule("1866").render(&["mj-text"]);
        assert_eq!(rendered, r#"Tag "mj-text" has no attribute "$1""#);
    }

    #[rstest]
    fn render_replaces_first_occurrence_only() {
        let rendered = rule("1871").render(&["$1", "mj-column"]);
        assert_eq!(
            rendered,
            r#"Tag "mj-column" is not allowed here, only "$1" are accepted"#
        );
    }
}
