use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The word-boundary pattern used for tokenization.
///
/// An explicit configuration value threaded through every call that
/// tokenizes text, so the document and the compared strings are always
/// split the same way. The default matches maximal runs of ASCII word
/// characters (`[A-Za-z0-9_]+`).
#[derive(Debug, Clone)]
pub struct WordPattern {
    regex: Regex,
}

impl WordPattern {
    /// The default word-character pattern.
    pub const DEFAULT: &'static str = "[A-Za-z0-9_]+";

    /// Compile a custom word pattern.
    ///
    /// # Errors
    ///
    /// Returns the underlying `regex` error when the pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for WordPattern {
    fn default() -> Self {
        // The default pattern is a known-good literal.
        Self::new(Self::DEFAULT).expect("default word pattern compiles")
    }
}

/// Tokenize a string into words.
///
/// Returns the pattern's matches left to right, duplicates preserved.
#[must_use]
pub fn words_in_string<'a>(s: &'a str, pattern: &WordPattern) -> Vec<&'a str> {
    pattern.regex.find_iter(s).map(|m| m.as_str()).collect()
}

/// Word occurrence counts across a reference document.
///
/// Built once per document and reusable across many rating calls. Counting
/// uses exact string equality: no case folding, no stemming.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
}

impl WordFrequencies {
    /// Frequency of `word`, treating unseen words as frequency 1.
    ///
    /// Absent words count as maximally rare rather than zero-weight, so a
    /// match on a word outside the reference document is never discarded.
    #[must_use]
    pub fn frequency(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(1)
    }

    /// Recorded count for `word`, if the document contained it.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(word, count)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

/// Count word occurrences across an ordered sequence of lines.
pub fn calculate_word_frequencies<S: AsRef<str>>(
    document: &[S],
    pattern: &WordPattern,
) -> WordFrequencies {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for line in document {
        for word in words_in_string(line.as_ref(), pattern) {
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    WordFrequencies { counts }
}

/// Read a reference document as a sequence of lines.
///
/// # Errors
///
/// Returns `DocumentError::Io` if the file cannot be opened or read.
pub fn read_document(path: &Path) -> Result<Vec<String>, DocumentError> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_preserves_order_and_duplicates() {
        let pattern = WordPattern::default();
        let words = words_in_string("the cat and the hat", &pattern);
        assert_eq!(words, vec!["the", "cat", "and", "the", "hat"]);
    }

    #[test]
    fn tokenizer_splits_on_punctuation() {
        let pattern = WordPattern::default();
        let words = words_in_string("foo_bar, baz! qux-42", &pattern);
        assert_eq!(words, vec!["foo_bar", "baz", "qux", "42"]);
    }

    #[test]
    fn tokenizer_on_empty_string() {
        let pattern = WordPattern::default();
        assert!(words_in_string("", &pattern).is_empty());
    }

    #[test]
    fn frequencies_accumulate_within_a_line() {
        let pattern = WordPattern::default();
        let freq = calculate_word_frequencies(&["a a b"], &pattern);
        assert_eq!(freq.get("a"), Some(2));
        assert_eq!(freq.get("b"), Some(1));
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn frequencies_accumulate_across_lines() {
        let pattern = WordPattern::default();
        let freq = calculate_word_frequencies(&["the cat", "the hat", "the end"], &pattern);
        assert_eq!(freq.get("the"), Some(3));
        assert_eq!(freq.get("cat"), Some(1));
    }

    #[test]
    fn unseen_words_have_frequency_one() {
        let pattern = WordPattern::default();
        let freq = calculate_word_frequencies(&["a a b"], &pattern);
        assert_eq!(freq.frequency("zebra"), 1);
        assert_eq!(freq.frequency("a"), 2);
    }

    #[test]
    fn counting_is_case_sensitive() {
        let pattern = WordPattern::default();
        let freq = calculate_word_frequencies(&["Cat cat CAT"], &pattern);
        assert_eq!(freq.get("Cat"), Some(1));
        assert_eq!(freq.get("cat"), Some(1));
        assert_eq!(freq.get("CAT"), Some(1));
    }

    #[test]
    fn empty_document_yields_empty_table() {
        let pattern = WordPattern::default();
        let freq = calculate_word_frequencies::<&str>(&[], &pattern);
        assert!(freq.is_empty());
    }

    #[test]
    fn custom_pattern_changes_tokenization() {
        let letters_only = WordPattern::new("[A-Za-z]+").unwrap();
        let words = words_in_string("abc123def", &letters_only);
        assert_eq!(words, vec!["abc", "def"]);
    }
}
