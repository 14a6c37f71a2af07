//! Coarse word segmentation: whitespace splitting plus punctuation
//! isolation.

use std::collections::HashSet;

use crate::error::Result;
use crate::normalize::{is_punctuation, TextNormalizer};
use crate::traits::Tokenizer;

/// Splits cleaned text into whitespace-delimited words, then splits each
/// word on punctuation boundaries.
///
/// Words that exactly match an entry of the never-split set (the
/// vocabulary's bracketed control markers such as `[CLS]`) are emitted
/// verbatim: no case folding, no punctuation splitting. The check runs
/// before lowercasing, so `[SEP]` survives even with `do_lower_case`.
///
/// # Examples
///
/// ```
/// use palabra::{BasicTokenizer, Tokenizer};
///
/// let tokenizer = BasicTokenizer::new(true, true);
/// let tokens = tokenizer.tokenize("I don't KNOW.").unwrap();
/// assert_eq!(tokens, vec!["i", "don", "'", "t", "know", "."]);
/// ```
#[derive(Debug, Clone)]
pub struct BasicTokenizer {
    normalizer: TextNormalizer,
    never_split: HashSet<String>,
}

impl BasicTokenizer {
    /// Create a tokenizer with an empty never-split set.
    #[must_use]
    pub fn new(do_lower_case: bool, strip_accents: bool) -> Self {
        Self {
            normalizer: TextNormalizer::new(do_lower_case, strip_accents),
            never_split: HashSet::new(),
        }
    }

    /// Replace the set of tokens that bypass normalization and splitting.
    #[must_use]
    pub fn with_never_split(mut self, never_split: HashSet<String>) -> Self {
        self.never_split = never_split;
        self
    }

    /// Split a word into single-character punctuation tokens and maximal
    /// runs of non-punctuation characters, preserving order.
    fn split_on_punctuation(word: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in word.chars() {
            if is_punctuation(ch) {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(ch.to_string());
            } else {
                current.push(ch);
            }
        }

        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
    }
}

impl Tokenizer for BasicTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let cleaned = self.normalizer.clean(text);

        let mut tokens = Vec::new();
        for word in cleaned.split_whitespace() {
            if self.never_split.contains(word) {
                tokens.push(word.to_string());
                continue;
            }
            let word = self.normalizer.normalize_word(word);
            tokens.extend(Self::split_on_punctuation(&word));
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenizer_splits_words() {
        let tokenizer = BasicTokenizer::new(true, true);
        let tokens = tokenizer
            .tokenize("this test case is for simple cases")
            .expect("tokenize should succeed");
        assert_eq!(
            tokens,
            vec!["this", "test", "case", "is", "for", "simple", "cases"]
        );
    }

    #[test]
    fn test_punctuation_becomes_single_character_tokens() {
        let tokenizer = BasicTokenizer::new(true, true);
        let tokens = tokenizer
            .tokenize("don't stop,now!")
            .expect("tokenize should succeed");
        assert_eq!(tokens, vec!["don", "'", "t", "stop", ",", "now", "!"]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let tokenizer = BasicTokenizer::new(true, true);
        let tokens = tokenizer
            .tokenize("  foo \t\n bar  ")
            .expect("tokenize should succeed");
        assert_eq!(tokens, vec!["foo", "bar"]);
    }

    #[test]
    fn test_empty_and_whitespace_inputs() {
        let tokenizer = BasicTokenizer::new(true, true);
        assert_eq!(
            tokenizer.tokenize("").expect("tokenize should succeed"),
            Vec::<String>::new()
        );
        assert_eq!(
            tokenizer
                .tokenize(" \t \n ")
                .expect("tokenize should succeed"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_word_of_punctuation_only() {
        let tokenizer = BasicTokenizer::new(true, true);
        let tokens = tokenizer.tokenize("...").expect("tokenize should succeed");
        assert_eq!(tokens, vec![".", ".", "."]);
    }

    #[test]
    fn test_lowercasing_can_be_disabled() {
        let tokenizer = BasicTokenizer::new(false, false);
        let tokens = tokenizer
            .tokenize("Hello World")
            .expect("tokenize should succeed");
        assert_eq!(tokens, vec!["Hello", "World"]);
    }

    #[test]
    fn test_accents_stripped_when_lowercasing() {
        let tokenizer = BasicTokenizer::new(true, true);
        let tokens = tokenizer
            .tokenize("Caf\u{00e9} na\u{00ef}ve")
            .expect("tokenize should succeed");
        assert_eq!(tokens, vec!["cafe", "naive"]);
    }

    #[test]
    fn test_never_split_markers_pass_through() {
        let never_split: HashSet<String> =
            ["[CLS]".to_string(), "[SEP]".to_string()].into_iter().collect();
        let tokenizer = BasicTokenizer::new(true, true).with_never_split(never_split);
        let tokens = tokenizer
            .tokenize("[CLS] Hello [SEP]")
            .expect("tokenize should succeed");
        assert_eq!(tokens, vec!["[CLS]", "hello", "[SEP]"]);
    }

    #[test]
    fn test_marker_not_in_set_is_split() {
        let tokenizer = BasicTokenizer::new(true, true);
        let tokens = tokenizer
            .tokenize("[CLS]")
            .expect("tokenize should succeed");
        assert_eq!(tokens, vec!["[", "cls", "]"]);
    }

    #[test]
    fn test_unicode_punctuation_splits() {
        let tokenizer = BasicTokenizer::new(true, true);
        let tokens = tokenizer
            .tokenize("hola\u{2014}mundo\u{3002}")
            .expect("tokenize should succeed");
        assert_eq!(tokens, vec!["hola", "\u{2014}", "mundo", "\u{3002}"]);
    }

    #[test]
    fn test_no_empty_tokens() {
        let tokenizer = BasicTokenizer::new(true, true);
        for input in ["", "!!", " a!b ", "...x...", "\t,\n"] {
            for token in tokenizer.tokenize(input).expect("tokenize should succeed") {
                assert!(!token.is_empty(), "empty token for input {input:?}");
            }
        }
    }
}
