//! Greedy longest-match-first subword splitting against a vocabulary.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::Tokenizer;
use crate::vocab::Vocabulary;

/// Prefix marking a piece as the continuation of a word. Part of the
/// token's textual identity, not a separate flag.
pub const CONTINUATION_PREFIX: &str = "##";

/// Splits a single word into the longest matching vocabulary substrings.
///
/// Non-initial pieces are looked up (and emitted) with the
/// [`CONTINUATION_PREFIX`]. If the search bottoms out at any cursor
/// position, every piece already matched for that word is discarded and
/// the whole word becomes one unknown token; there is no per-character
/// fallback.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use palabra::{Vocabulary, WordpieceTokenizer};
///
/// let vocab = Arc::new(Vocabulary::from_vocab_text("[UNK]\ncheck\nchecking\n##ing").unwrap());
/// let tokenizer = WordpieceTokenizer::new(vocab, "[UNK]", 200);
/// assert_eq!(tokenizer.tokenize_word("checkinging"), vec!["checking", "##ing"]);
/// assert_eq!(tokenizer.tokenize_word("checkers"), vec!["[UNK]"]);
/// ```
#[derive(Debug, Clone)]
pub struct WordpieceTokenizer {
    vocab: Arc<Vocabulary>,
    unk_token: String,
    max_input_chars_per_word: usize,
}

impl WordpieceTokenizer {
    /// Create a tokenizer over a shared, read-only vocabulary.
    #[must_use]
    pub fn new(
        vocab: Arc<Vocabulary>,
        unk_token: impl Into<String>,
        max_input_chars_per_word: usize,
    ) -> Self {
        Self {
            vocab,
            unk_token: unk_token.into(),
            max_input_chars_per_word,
        }
    }

    /// Split one coarse token into subword pieces.
    ///
    /// Always returns at least one piece for a non-empty word; an empty
    /// word yields an empty sequence. Character length (code points, not
    /// bytes) over the per-word cap yields a single unknown token no
    /// matter what prefixes would match.
    #[must_use]
    pub fn tokenize_word(&self, word: &str) -> Vec<String> {
        if word.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = word.chars().collect();
        if chars.len() > self.max_input_chars_per_word {
            return vec![self.unk_token.clone()];
        }

        let mut pieces = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let mut end = chars.len();
            let mut matched: Option<String> = None;

            // Longest candidate first; shrink until the vocabulary has it.
            while start < end {
                let mut substr: String = if start > 0 {
                    CONTINUATION_PREFIX.to_string()
                } else {
                    String::new()
                };
                substr.extend(&chars[start..end]);

                if self.vocab.contains(&substr) {
                    matched = Some(substr);
                    break;
                }
                end -= 1;
            }

            match matched {
                Some(piece) => {
                    pieces.push(piece);
                    start = end;
                }
                None => {
                    // The word has no greedy decomposition: drop whatever
                    // matched so far and represent the whole word as unknown.
                    return vec![self.unk_token.clone()];
                }
            }
        }

        pieces
    }
}

impl Tokenizer for WordpieceTokenizer {
    /// Whitespace-splits the input and applies [`Self::tokenize_word`] to
    /// each word in order.
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            tokens.extend(self.tokenize_word(word));
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tokenizer(entries: &[&str], max: usize) -> WordpieceTokenizer {
        let vocab = Arc::new(
            Vocabulary::from_tokens(entries.iter().map(|t| t.to_string()).collect())
                .expect("distinct entries"),
        );
        WordpieceTokenizer::new(vocab, "[UNK]", max)
    }

    #[test]
    fn test_whole_word_match() {
        let tokenizer = make_tokenizer(&["[UNK]", "hello"], 200);
        assert_eq!(tokenizer.tokenize_word("hello"), vec!["hello"]);
    }

    #[test]
    fn test_longest_match_wins() {
        // "checkinging" must take "checking", not "check".
        let tokenizer = make_tokenizer(&["[UNK]", "check", "checking", "##ing", "##inging"], 200);
        assert_eq!(
            tokenizer.tokenize_word("checkinging"),
            vec!["checking", "##ing"]
        );
    }

    #[test]
    fn test_continuation_pieces() {
        let tokenizer = make_tokenizer(&["[UNK]", "gt", "##ab"], 200);
        assert_eq!(tokenizer.tokenize_word("gtab"), vec!["gt", "##ab"]);
    }

    #[test]
    fn test_failure_discards_partial_pieces() {
        // "check" matches, but "q" has no "##q" entry: the whole word is
        // unknown, not ["check", "[UNK]"].
        let tokenizer = make_tokenizer(&["[UNK]", "check"], 200);
        assert_eq!(tokenizer.tokenize_word("checkq"), vec!["[UNK]"]);
    }

    #[test]
    fn test_unknown_first_character() {
        let tokenizer = make_tokenizer(&["[UNK]", "##a"], 200);
        assert_eq!(tokenizer.tokenize_word("xa"), vec!["[UNK]"]);
    }

    #[test]
    fn test_over_length_word_is_single_unknown() {
        let tokenizer = make_tokenizer(&["[UNK]", "aa", "##aa", "##a", "a"], 4);
        // Five characters with a cap of four: prefixes would match, but the
        // cap wins and exactly one token comes out.
        assert_eq!(tokenizer.tokenize_word("aaaaa"), vec!["[UNK]"]);
        // At the cap, normal splitting applies.
        assert_eq!(tokenizer.tokenize_word("aaaa"), vec!["aa", "##aa"]);
    }

    #[test]
    fn test_empty_word() {
        let tokenizer = make_tokenizer(&["[UNK]"], 200);
        assert_eq!(tokenizer.tokenize_word(""), Vec::<String>::new());
    }

    #[test]
    fn test_length_is_counted_in_characters() {
        // Four multibyte characters, cap four: must not trip the guard.
        let tokenizer = make_tokenizer(&["[UNK]", "日本語あ"], 4);
        assert_eq!(tokenizer.tokenize_word("日本語あ"), vec!["日本語あ"]);
    }

    #[test]
    fn test_tokenizer_trait_splits_on_whitespace() {
        let tokenizer = make_tokenizer(&["[UNK]", "un", "##wan", "##t"], 200);
        let tokens = tokenizer
            .tokenize("unwant unwant")
            .expect("tokenize should succeed");
        assert_eq!(tokens, vec!["un", "##wan", "##t", "un", "##wan", "##t"]);
    }

    #[test]
    fn test_continuation_lookup_uses_prefix() {
        // "##ab" in the vocabulary must not match a word-initial "ab".
        let tokenizer = make_tokenizer(&["[UNK]", "##ab"], 200);
        assert_eq!(tokenizer.tokenize_word("ab"), vec!["[UNK]"]);
    }
}
