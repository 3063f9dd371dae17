//! Include/exclude pattern pair deciding whether a rule applies
//!
//! A selector is matched against a single string: either a configuration key
//! or a plugin class name. Patterns are compiled once at construction.
//!
//! Exclude semantics: when an exclude pattern is present the string must
//! *match* it to pass. Every built-in rule uses `exclude = None`.

use regex::Regex;

use crate::error::{Error, Result};

/// Include/exclude regex pair
#[derive(Debug, Clone)]
pub struct Selector {
    include: Regex,
    exclude: Option<Regex>,
}

impl Selector {
    /// Compile a selector from an include and an optional exclude pattern
    pub fn new(include: &str, exclude: Option<&str>) -> Result<Self> {
        Ok(Self {
            include: compile(include)?,
            exclude: exclude.map(compile).transpose()?,
        })
    }

    /// Selector with only an include pattern
    pub fn include(pattern: &str) -> Result<Self> {
        Self::new(pattern, None)
    }

    /// Selector matching exactly one literal string
    pub fn exact(literal: &str) -> Result<Self> {
        Self::include(&format!("^{}$", regex::escape(literal)))
    }

    /// Selector matching one of several literal strings
    pub fn any_of(literals: &[&str]) -> Result<Self> {
        let alternatives: Vec<String> = literals.iter().map(|l| regex::escape(l)).collect();
        Self::include(&format!("^(?:{})$", alternatives.join("|")))
    }

    /// Selector matching everything
    pub fn all() -> Result<Self> {
        Self::include(".*")
    }

    /// Whether the selector accepts `s`
    pub fn is_match(&self, s: &str) -> bool {
        if let Some(exclude) = &self.exclude {
            if !exclude.is_match(s) {
                return false;
            }
        }
        self.include.is_match(s)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("tasks.max")]
    #[case("com.redpanda.kafka.connect.s3.S3SinkConnector")]
    #[case("")]
    fn test_match_all_without_exclude(#[case] input: &str) {
        let selector = Selector::new(".*", None).unwrap();
        assert!(selector.is_match(input));
    }

    #[test]
    fn test_exclude_requires_a_match() {
        let selector = Selector::new(".*", Some(r"^ssl\.")).unwrap();
        // Strings that do not match the exclude pattern are rejected
        assert!(!selector.is_match("tasks.max"));
        // Strings that match it pass through to the include pattern
        assert!(selector.is_match("ssl.keystore.location"));
    }

    #[test]
    fn test_exclude_match_still_needs_include() {
        let selector = Selector::new(r"^key\.", Some(r"converter$")).unwrap();
        assert!(selector.is_match("key.converter"));
        assert!(!selector.is_match("value.converter"));
        assert!(!selector.is_match("key.ignore"));
    }

    #[test]
    fn test_exact_escapes_literal() {
        let selector = Selector::exact("a.b").unwrap();
        assert!(selector.is_match("a.b"));
        assert!(!selector.is_match("axb"));
        assert!(!selector.is_match("a.b.c"));
    }

    #[test]
    fn test_any_of() {
        let selector = Selector::any_of(&["key.converter", "value.converter"]).unwrap();
        assert!(selector.is_match("key.converter"));
        assert!(selector.is_match("value.converter"));
        assert!(!selector.is_match("header.converter"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Selector::new("[invalid", None).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
        assert!(err.to_string().contains("[invalid"));
    }
}
