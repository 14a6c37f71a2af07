//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use palabra::prelude::*;
//! ```

pub use crate::config::TokenizerConfig;
pub use crate::error::{PalabraError, Result};
pub use crate::full::FullTokenizer;
pub use crate::traits::Tokenizer;
pub use crate::vocab::Vocabulary;
