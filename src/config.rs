//! Tokenizer configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PalabraError, Result};

/// Default cap on the character length of a single coarse token.
pub const DEFAULT_MAX_INPUT_CHARS_PER_WORD: usize = 200;

/// Default placeholder emitted for out-of-vocabulary words.
pub const DEFAULT_UNKNOWN_TOKEN: &str = "[UNK]";

/// Configuration for [`FullTokenizer`](crate::FullTokenizer).
///
/// All options have BERT-compatible defaults; invalid values are rejected
/// at tokenizer construction, never mid-tokenization.
///
/// # Examples
///
/// ```
/// use palabra::TokenizerConfig;
///
/// let config = TokenizerConfig::default()
///     .with_do_lower_case(false)
///     .with_max_input_chars_per_word(100);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.unknown_token, "[UNK]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Fold case during normalization.
    pub do_lower_case: bool,

    /// Decompose precomposed characters and drop combining marks.
    /// Only applied when `do_lower_case` is set, matching BERT.
    pub strip_accents: bool,

    /// Guard against pathological single tokens: a coarse token longer
    /// than this (in characters) becomes one unknown token.
    pub max_input_chars_per_word: usize,

    /// Placeholder emitted when no subword split succeeds. Must be an
    /// entry of the vocabulary handed to the tokenizer.
    pub unknown_token: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            do_lower_case: true,
            strip_accents: true,
            max_input_chars_per_word: DEFAULT_MAX_INPUT_CHARS_PER_WORD,
            unknown_token: DEFAULT_UNKNOWN_TOKEN.to_string(),
        }
    }
}

impl TokenizerConfig {
    /// Create a configuration with BERT-compatible defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether text is lowercased during normalization.
    #[must_use]
    pub fn with_do_lower_case(mut self, do_lower_case: bool) -> Self {
        self.do_lower_case = do_lower_case;
        self
    }

    /// Set whether accents are stripped (effective only with lowercasing).
    #[must_use]
    pub fn with_strip_accents(mut self, strip_accents: bool) -> Self {
        self.strip_accents = strip_accents;
        self
    }

    /// Set the per-word character cap.
    #[must_use]
    pub fn with_max_input_chars_per_word(mut self, max: usize) -> Self {
        self.max_input_chars_per_word = max;
        self
    }

    /// Set the unknown-token placeholder.
    #[must_use]
    pub fn with_unknown_token(mut self, token: impl Into<String>) -> Self {
        self.unknown_token = token.into();
        self
    }

    /// Check the configuration for invalid values.
    ///
    /// # Errors
    ///
    /// Returns [`PalabraError::InvalidHyperparameter`] if
    /// `max_input_chars_per_word` is zero or `unknown_token` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.max_input_chars_per_word == 0 {
            return Err(PalabraError::InvalidHyperparameter {
                param: "max_input_chars_per_word".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        if self.unknown_token.is_empty() {
            return Err(PalabraError::InvalidHyperparameter {
                param: "unknown_token".to_string(),
                value: String::new(),
                constraint: "a non-empty token".to_string(),
            });
        }
        Ok(())
    }
}
