//! Palabra: WordPiece tokenization for BERT-family models in pure Rust.
//!
//! Palabra converts raw natural-language text into subword tokens drawn
//! from a fixed vocabulary, and converts tokens to integer ids, replicating
//! the WordPiece scheme used to prepare BERT-family model input: Unicode
//! cleaning, whitespace/punctuation segmentation, then greedy
//! longest-match-first subword splitting.
//!
//! # Quick Start
//!
//! ```
//! use palabra::prelude::*;
//!
//! // One vocabulary entry per line; the line index is the token id.
//! let vocab = Vocabulary::from_vocab_text(
//!     "[UNK]\n[CLS]\n[SEP]\nhello\nworld\nrun\n##ning\n!",
//! ).unwrap();
//!
//! let tokenizer = FullTokenizer::new(vocab, TokenizerConfig::default()).unwrap();
//!
//! let tokens = tokenizer.tokenize("Hello running world!").unwrap();
//! assert_eq!(tokens, vec!["hello", "run", "##ning", "world", "!"]);
//!
//! let ids = tokenizer.tokens_to_ids(&tokens);
//! assert_eq!(ids, vec![3, 5, 6, 4, 7]);
//! assert_eq!(tokenizer.ids_to_tokens(&ids).unwrap(), tokens);
//! ```
//!
//! # Modules
//!
//! - [`vocab`]: immutable bidirectional token ↔ id table
//! - [`normalize`]: Unicode text cleaning and character classification
//! - [`basic`]: whitespace and punctuation segmentation
//! - [`wordpiece`]: greedy longest-match subword splitting
//! - [`full`]: the assembled pipeline with id conversion
//! - [`config`]: tokenizer options
//! - [`error`]: error types
//!
//! Everything is immutable after construction: one [`FullTokenizer`] can be
//! shared read-only across threads without locking.

pub mod basic;
pub mod config;
pub mod error;
pub mod full;
pub mod normalize;
pub mod prelude;
pub mod traits;
pub mod vocab;
pub mod wordpiece;

pub use basic::BasicTokenizer;
pub use config::TokenizerConfig;
pub use error::{PalabraError, Result};
pub use full::FullTokenizer;
pub use normalize::TextNormalizer;
pub use traits::Tokenizer;
pub use vocab::Vocabulary;
pub use wordpiece::{WordpieceTokenizer, CONTINUATION_PREFIX};
