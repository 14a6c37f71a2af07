//! Vocabulary: an immutable bidirectional token ↔ id table.
//!
//! Ids are dense and zero-based: the position of an entry in the input
//! sequence is its id. The forward direction is a hash map, the inverse is
//! the input vector itself, so both lookups are O(1) and the round-trip
//! `id → token → id` is structural rather than checked.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{PalabraError, Result};

/// Immutable mapping between subword strings and integer ids.
///
/// Built once from an ordered, duplicate-free sequence of entries and
/// read-only afterwards; safe to share across threads (the tokenizers hold
/// it behind an `Arc`).
///
/// # Examples
///
/// ```
/// use palabra::Vocabulary;
///
/// let vocab = Vocabulary::from_tokens(vec![
///     "[UNK]".to_string(),
///     "hello".to_string(),
///     "##s".to_string(),
/// ]).unwrap();
///
/// assert_eq!(vocab.len(), 3);
/// assert_eq!(vocab.lookup_id("hello").unwrap(), 1);
/// assert_eq!(vocab.lookup_token(2).unwrap(), "##s");
/// assert!(vocab.contains("[UNK]"));
/// ```
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Token string -> token id lookup.
    token_to_id: HashMap<String, u32>,
    /// Token id -> token string; the index is the id.
    id_to_token: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from an ordered sequence of distinct entries.
    ///
    /// The position of each entry is its id.
    ///
    /// # Errors
    ///
    /// Returns [`PalabraError::DuplicateToken`] on the first repeated
    /// entry; no partial vocabulary is returned.
    pub fn from_tokens(tokens: Vec<String>) -> Result<Self> {
        let mut token_to_id = HashMap::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            if let Some(&first) = token_to_id.get(token) {
                return Err(PalabraError::DuplicateToken {
                    token: token.clone(),
                    id: first,
                });
            }
            token_to_id.insert(token.clone(), i as u32);
        }

        debug!(vocab_size = tokens.len(), "vocabulary built");

        Ok(Self {
            token_to_id,
            id_to_token: tokens,
        })
    }

    /// Build a vocabulary from the body of a `vocab.txt` file, one entry
    /// per line. Surrounding whitespace is trimmed from each line, so
    /// Windows line endings are handled; a trailing newline contributes no
    /// entry.
    ///
    /// The caller reads the file; this crate performs no I/O.
    ///
    /// # Errors
    ///
    /// Returns [`PalabraError::DuplicateToken`] if two lines are equal
    /// after trimming.
    pub fn from_vocab_text(text: &str) -> Result<Self> {
        let tokens: Vec<String> = text.lines().map(|line| line.trim().to_string()).collect();
        Self::from_tokens(tokens)
    }

    /// Id for an exact string match.
    ///
    /// # Errors
    ///
    /// Returns [`PalabraError::TokenNotFound`] if the token is absent; the
    /// caller decides the fallback. `FullTokenizer::tokens_to_ids`
    /// substitutes the unknown token instead of failing.
    pub fn lookup_id(&self, token: &str) -> Result<u32> {
        self.get(token).ok_or_else(|| PalabraError::TokenNotFound {
            token: token.to_string(),
        })
    }

    /// Token assigned to an id.
    ///
    /// # Errors
    ///
    /// Returns [`PalabraError::IdOutOfRange`] if the id is unassigned.
    pub fn lookup_token(&self, id: u32) -> Result<&str> {
        self.id_to_token
            .get(id as usize)
            .map(String::as_str)
            .ok_or(PalabraError::IdOutOfRange {
                id,
                vocab_size: self.id_to_token.len(),
            })
    }

    /// Id for a token, `None` if absent. The non-failing lookup used on
    /// the tokenization hot path.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    /// Pure membership test.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Whether the vocabulary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// Iterate over `(id, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.id_to_token
            .iter()
            .enumerate()
            .map(|(i, t)| (i as u32, t.as_str()))
    }
}
