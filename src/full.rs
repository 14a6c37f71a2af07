//! End-to-end WordPiece pipeline: coarse segmentation, subword splitting
//! and token ↔ id conversion.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::basic::BasicTokenizer;
use crate::config::TokenizerConfig;
use crate::error::{PalabraError, Result};
use crate::traits::Tokenizer;
use crate::vocab::Vocabulary;
use crate::wordpiece::WordpieceTokenizer;

/// The complete tokenizer: [`BasicTokenizer`] → [`WordpieceTokenizer`],
/// with id conversion through the shared [`Vocabulary`].
///
/// Immutable after construction and `Send + Sync`; one instance can serve
/// any number of concurrent callers.
///
/// # Examples
///
/// ```
/// use palabra::{FullTokenizer, TokenizerConfig, Vocabulary};
///
/// let vocab = Vocabulary::from_vocab_text("[UNK]\n[CLS]\n[SEP]\nhello\nworld\n##s").unwrap();
/// let tokenizer = FullTokenizer::new(vocab, TokenizerConfig::default()).unwrap();
///
/// let tokens = tokenizer.tokenize("Hello worlds").unwrap();
/// assert_eq!(tokens, vec!["hello", "world", "##s"]);
///
/// let ids = tokenizer.tokens_to_ids(&tokens);
/// assert_eq!(tokenizer.ids_to_tokens(&ids).unwrap(), tokens);
/// ```
#[derive(Debug, Clone)]
pub struct FullTokenizer {
    vocab: Arc<Vocabulary>,
    basic: BasicTokenizer,
    wordpiece: WordpieceTokenizer,
    unk_id: u32,
}

impl FullTokenizer {
    /// Build the pipeline over a finished vocabulary.
    ///
    /// Bracketed all-caps vocabulary entries (`[CLS]`, `[SEP]`, `[MASK]`,
    /// ...) become the basic tokenizer's never-split set.
    ///
    /// # Errors
    ///
    /// Returns [`PalabraError::InvalidHyperparameter`] if the
    /// configuration fails [`TokenizerConfig::validate`] or if
    /// `unknown_token` is not a vocabulary entry (it must have an id for
    /// [`Self::tokens_to_ids`] to substitute).
    pub fn new(vocab: Vocabulary, config: TokenizerConfig) -> Result<Self> {
        config.validate()?;

        let unk_id = vocab.get(&config.unknown_token).ok_or_else(|| {
            PalabraError::InvalidHyperparameter {
                param: "unknown_token".to_string(),
                value: config.unknown_token.clone(),
                constraint: "a vocabulary entry".to_string(),
            }
        })?;

        let never_split: HashSet<String> = vocab
            .iter()
            .filter(|(_, token)| is_control_marker(token))
            .map(|(_, token)| token.to_string())
            .collect();

        debug!(
            vocab_size = vocab.len(),
            do_lower_case = config.do_lower_case,
            never_split = never_split.len(),
            unk_id,
            "WordPiece tokenizer initialized"
        );

        let vocab = Arc::new(vocab);
        let basic = BasicTokenizer::new(config.do_lower_case, config.strip_accents)
            .with_never_split(never_split);
        let wordpiece = WordpieceTokenizer::new(
            Arc::clone(&vocab),
            config.unknown_token,
            config.max_input_chars_per_word,
        );

        Ok(Self {
            vocab,
            basic,
            wordpiece,
            unk_id,
        })
    }

    /// Tokenize text into subword tokens.
    ///
    /// # Errors
    ///
    /// Total over arbitrary input; see [`Tokenizer::tokenize`].
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        for word in self.basic.tokenize(text)? {
            tokens.extend(self.wordpiece.tokenize_word(&word));
        }
        Ok(tokens)
    }

    /// Map tokens to ids; out-of-vocabulary tokens become the unknown
    /// token's id. Total by design, unlike [`Vocabulary::lookup_id`].
    #[must_use]
    pub fn tokens_to_ids(&self, tokens: &[String]) -> Vec<u32> {
        tokens
            .iter()
            .map(|t| self.vocab.get(t).unwrap_or(self.unk_id))
            .collect()
    }

    /// Map ids back to tokens.
    ///
    /// # Errors
    ///
    /// Returns [`PalabraError::IdOutOfRange`] for any unassigned id. Ids
    /// produced by [`Self::tokenize`] + [`Self::tokens_to_ids`] are always
    /// assigned.
    pub fn ids_to_tokens(&self, ids: &[u32]) -> Result<Vec<String>> {
        ids.iter()
            .map(|&id| self.vocab.lookup_token(id).map(ToString::to_string))
            .collect()
    }

    /// Tokenize and convert to ids in one call.
    ///
    /// # Errors
    ///
    /// Total over arbitrary input; see [`Self::tokenize`].
    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        Ok(self.tokens_to_ids(&self.tokenize(text)?))
    }

    /// The shared vocabulary.
    #[must_use]
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Number of vocabulary entries.
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Id of the configured unknown token.
    #[must_use]
    pub fn unk_id(&self) -> u32 {
        self.unk_id
    }
}

impl Tokenizer for FullTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        FullTokenizer::tokenize(self, text)
    }
}

/// Bracketed all-caps markers (`[UNK]`, `[CLS]`, `[SEP]`, `[MASK]`,
/// `[PAD]`, ...) are treated as atomic by the basic tokenizer.
fn is_control_marker(token: &str) -> bool {
    token.len() > 2
        && token.starts_with('[')
        && token.ends_with(']')
        && token[1..token.len() - 1]
            .chars()
            .all(|c| c.is_ascii_uppercase())
}
