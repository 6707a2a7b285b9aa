//! Severity inference for foreign log lines
//!
//! Lines written by other loggers carry their level as text, if at all
//! (`ERROR: disk full`, ` WARN retrying`, `[info] ready`). A classifier turns
//! such a line into a level plus the message without its level token.

use crate::constants::LEVEL_PREFIX_PATTERN;
use crate::Severity;
use regex::Regex;
use std::sync::LazyLock;

/// Result of classifying one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub level: Severity,
    /// Remaining text, trimmed
    pub message: &'a str,
}

/// Strategy used by the foreign-stream adapter to level a line
pub trait LevelClassifier: Send + Sync {
    fn classify<'a>(&self, line: &'a str) -> Classified<'a>;
}

/// Regex classifier keyed on a leading level word
///
/// Capture group 1 is the prefix to remove and group 2 the level word,
/// mapped by its first letter (`f`atal, `a`lert, `c`ritical, `e`rror,
/// `w`arning, `n`otice, `i`nfo, `d`ebug). Unmatched lines keep their text and
/// get the default level.
#[derive(Debug, Clone)]
pub struct PrefixClassifier {
    pattern: Regex,
    default_level: Severity,
}

impl PrefixClassifier {
    /// Classifier for an alternate prefix vocabulary
    pub fn with_pattern(pattern: &str, default_level: Severity) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            default_level,
        })
    }

    pub fn default_level(&self) -> Severity {
        self.default_level
    }
}

// Constant pattern, covered by the tests below
static LEVEL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LEVEL_PREFIX_PATTERN).expect("level prefix pattern is valid"));

impl Default for PrefixClassifier {
    /// Built-in vocabulary, unmatched lines at Notice
    fn default() -> Self {
        Self {
            pattern: LEVEL_PREFIX.clone(),
            default_level: Severity::Notice,
        }
    }
}

impl LevelClassifier for PrefixClassifier {
    fn classify<'a>(&self, line: &'a str) -> Classified<'a> {
        let matched = self.pattern.captures(line).and_then(|caps| {
            let prefix = caps.get(1)?;
            let level = caps.get(2).and_then(|word| level_for_word(word.as_str()))?;
            Some((prefix.end(), level))
        });

        match matched {
            Some((end, level)) => Classified {
                level,
                message: line[end..].trim(),
            },
            None => Classified {
                level: self.default_level,
                message: line.trim(),
            },
        }
    }
}

/// Level named by the first letter of a level word
pub fn level_for_word(word: &str) -> Option<Severity> {
    match word.chars().next()?.to_ascii_lowercase() {
        'f' => Some(Severity::Fatal),
        'a' => Some(Severity::Alert),
        'c' => Some(Severity::Critical),
        'e' => Some(Severity::Error),
        'w' => Some(Severity::Warning),
        'n' => Some(Severity::Notice),
        'i' => Some(Severity::Info),
        'd' => Some(Severity::Debug),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classify(line: &str) -> (Severity, &str) {
        let c = PrefixClassifier::default().classify(line);
        (c.level, c.message)
    }

    // === Matching prefixes ===

    #[test]
    fn test_error_prefix() {
        assert_eq!(classify("ERROR: disk full"), (Severity::Error, "disk full"));
    }

    #[test]
    fn test_every_level_word() {
        let cases = [
            ("fatal: x", Severity::Fatal),
            ("alert: x", Severity::Alert),
            ("critical: x", Severity::Critical),
            ("crit: x", Severity::Critical),
            ("error: x", Severity::Error),
            ("err: x", Severity::Error),
            ("e: x", Severity::Error),
            ("warning: x", Severity::Warning),
            ("warn: x", Severity::Warning),
            ("w: x", Severity::Warning),
            ("notice: x", Severity::Notice),
            ("info: x", Severity::Info),
            ("debug: x", Severity::Debug),
        ];
        for (line, expected) in cases {
            assert_eq!(classify(line), (expected, "x"), "line {line:?}");
        }
    }

    #[test]
    fn test_case_insensitive_and_plural() {
        assert_eq!(classify("Warnings: low disk"), (Severity::Warning, "low disk"));
        // `-` ends the separator run
        assert_eq!(classify("Warning - low disk"), (Severity::Warning, "- low disk"));
        assert_eq!(classify("DEBUG    tick"), (Severity::Debug, "tick"));
        assert_eq!(classify("Errors: 3 found"), (Severity::Error, "3 found"));
    }

    #[test]
    fn test_leading_non_letters_are_skipped() {
        assert_eq!(classify("[info] ready"), (Severity::Info, "ready"));
        assert_eq!(classify("  WARN retrying"), (Severity::Warning, "retrying"));
        assert_eq!(classify("*** CRIT *** boom"), (Severity::Critical, "boom"));
    }

    #[test]
    fn test_trailing_newline_trimmed() {
        assert_eq!(classify("INFO started\n"), (Severity::Info, "started"));
    }

    // === Non-matching lines ===

    #[test]
    fn test_level_word_inside_sentence_is_ignored() {
        assert_eq!(
            classify("something error occurred"),
            (Severity::Notice, "something error occurred")
        );
    }

    #[test]
    fn test_word_starting_with_level_letter_is_ignored() {
        assert_eq!(classify("everything ok"), (Severity::Notice, "everything ok"));
        assert_eq!(classify("information"), (Severity::Notice, "information"));
        assert_eq!(classify("debugger attached"), (Severity::Notice, "debugger attached"));
    }

    #[test]
    fn test_excluded_separators() {
        // `_`, `-` and `/` glue the word to what follows
        assert_eq!(classify("error_count=3"), (Severity::Notice, "error_count=3"));
        assert_eq!(classify("info-level set"), (Severity::Notice, "info-level set"));
        assert_eq!(classify("e/x path"), (Severity::Notice, "e/x path"));
        assert_eq!(classify("warn2 x"), (Severity::Notice, "warn2 x"));
    }

    #[test]
    fn test_leading_digits_block_match() {
        assert_eq!(
            classify("2024 error: late"),
            (Severity::Notice, "2024 error: late")
        );
    }

    #[test]
    fn test_level_word_needs_separator() {
        // Nothing after the word
        assert_eq!(classify("error"), (Severity::Notice, "error"));
    }

    #[test]
    fn test_plain_line_keeps_text() {
        assert_eq!(classify("  hello world  "), (Severity::Notice, "hello world"));
        assert_eq!(classify(""), (Severity::Notice, ""));
    }

    // === Alternate vocabularies ===

    #[test]
    fn test_custom_pattern_and_default() {
        let classifier =
            PrefixClassifier::with_pattern(r"^(<(d|i|w|e)>\s*)", Severity::Info).unwrap();
        let c = classifier.classify("<w> low battery");
        assert_eq!((c.level, c.message), (Severity::Warning, "low battery"));

        let c = classifier.classify("no tag");
        assert_eq!((c.level, c.message), (Severity::Info, "no tag"));
        assert_eq!(classifier.default_level(), Severity::Info);
    }

    #[test]
    fn test_invalid_custom_pattern() {
        assert!(PrefixClassifier::with_pattern("(", Severity::Notice).is_err());
    }

    #[test]
    fn test_default_classifiers_share_compiled_pattern() {
        let a = PrefixClassifier::default();
        let b = PrefixClassifier::default();
        assert_eq!(a.pattern.as_str(), LEVEL_PREFIX.as_str());
        assert_eq!(a.classify("warn: x"), b.classify("warn: x"));
    }

    #[test]
    fn test_level_for_word() {
        assert_eq!(level_for_word("Fatal"), Some(Severity::Fatal));
        assert_eq!(level_for_word("x"), None);
        assert_eq!(level_for_word(""), None);
    }

    proptest! {
        #[test]
        fn test_classify_never_panics(line in ".*") {
            let _ = PrefixClassifier::default().classify(&line);
        }

        #[test]
        fn test_message_is_suffix_of_line(line in "[ -~]{0,40}") {
            let c = PrefixClassifier::default().classify(&line);
            prop_assert!(line.contains(c.message));
        }

        #[test]
        fn test_lines_starting_with_other_letters_stay_notice(
            word in "[ghjklmopqrstuvxyz][a-z]{0,8}",
            rest in "[ -~]{0,20}",
        ) {
            let line = format!("{word}: {rest}");
            let c = PrefixClassifier::default().classify(&line);
            prop_assert_eq!(c.level, Severity::Notice);
        }
    }
}
