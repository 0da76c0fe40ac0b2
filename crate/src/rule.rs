//! A single pattern-based plural rule.

use crate::error::Error;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// A `PluralRule` pairs a case-insensitive regex with a replacement
/// template. The template uses the `regex` crate's expansion syntax, so
/// `"${1}ices"` inserts the first capture group followed by "ices". Always
/// wrap group references in braces when letters follow them, since `$1es`
/// refers to a group named `1es`.
#[derive(Clone, Debug)]
pub struct PluralRule {
    regex: Regex,
    replacement: String,
}

impl PluralRule {
    /// Compiles `pattern` case-insensitively. The pattern is searched for
    /// anywhere in the word, so rules that target an ending should anchor
    /// themselves with `$`.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            regex,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }

    /// Replaces the first match of this rule's pattern in `word` with the
    /// expanded template, keeping the rest of the word. Returns `None` if
    /// the pattern does not match.
    pub fn apply<'a>(&self, word: &'a str) -> Option<Cow<'a, str>> {
        let caps = self.regex.captures(word)?;
        let whole = caps.get(0)?;

        let mut plural = String::with_capacity(word.len() + self.replacement.len());
        plural.push_str(&word[..whole.start()]);
        caps.expand(&self.replacement, &mut plural);
        plural.push_str(&word[whole.end()..]);

        Some(Cow::Owned(plural))
    }
}

#[cfg(test)]
mod tests {
    use super::PluralRule;
    use pretty_assertions::assert_eq;

    #[test]
    fn apply() {
        let tests = [
            (r"(matr|vert|ind)(ix|ex)$", "${1}ices", "matrix", Some("matrices")),
            (r"(matr|vert|ind)(ix|ex)$", "${1}ices", "VERTEX", Some("VERTices")),
            (r"(ss|sh|ch|x|z)$", "${1}es", "glass", Some("glasses")),
            (r"sis$", "ses", "diagnosis", Some("diagnoses")),
            (r"([li])fe?$", "${1}ves", "shelf", Some("shelves")),
            (r"([a-rt-z])$", "${1}s", "dogs", None),
            (r"(m|l)ouse$", "${1}ice", "dormouse", Some("dormice")),
        ];
        for test in tests {
            let rule = PluralRule::new(test.0, test.1).expect("pattern compiles");
            assert_eq!(
                rule.apply(test.2).as_deref(),
                test.3,
                "{} => {} applied to {}",
                test.0,
                test.1,
                test.2,
            );
        }
    }

    #[test]
    fn only_first_match_is_replaced() {
        let rule = PluralRule::new("o", "0").expect("pattern compiles");
        assert_eq!(rule.apply("foo").as_deref(), Some("f0o"));
    }

    #[test]
    fn matching_ignores_case() {
        let rule = PluralRule::new("quiz$", "quizzes").expect("pattern compiles");
        assert!(rule.is_match("QUIZ"));
        assert!(rule.is_match("Quiz"));
        assert_eq!(rule.apply("QUIZ").as_deref(), Some("quizzes"));
    }

    #[test]
    fn accessors() {
        let rule = PluralRule::new(r"(t|i)um$", "${1}a").expect("pattern compiles");
        assert_eq!(rule.pattern(), r"(t|i)um$");
        assert_eq!(rule.replacement(), "${1}a");
    }

    #[test]
    fn invalid_pattern() {
        let err = PluralRule::new(r"(unclosed$", "x").expect_err("pattern is invalid");
        assert!(
            matches!(err, crate::error::Error::InvalidPattern { ref pattern, .. } if pattern == "(unclosed$"),
            "got {:?}",
            err,
        );
    }
}
