//! Core trait for tokenization strategies.
//!
//! The trait defines the API contract shared by every segmentation stage,
//! so callers can be generic over how text is split.

use crate::error::Result;

/// Turns a text into an ordered sequence of string tokens.
///
/// Implementations never produce empty-string tokens; an empty or
/// all-whitespace input yields an empty sequence.
///
/// # Examples
///
/// ```
/// use palabra::{BasicTokenizer, Tokenizer};
///
/// let tokenizer = BasicTokenizer::new(true, true);
/// let tokens = tokenizer.tokenize("Hello, world!").unwrap();
/// assert_eq!(tokens, vec!["hello", ",", "world", "!"]);
/// ```
pub trait Tokenizer {
    /// Tokenizes the input text.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails. The built-in tokenizers are
    /// total over arbitrary input and only keep the `Result` for parity
    /// across implementations.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
