//! Error types for Palabra operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Palabra operations.
///
/// Construction-time failures (duplicate vocabulary entries, invalid
/// hyperparameters) are fatal and surface here before any tokenizer is
/// handed to the caller. Lookup failures are reported per call.
///
/// # Examples
///
/// ```
/// use palabra::error::PalabraError;
///
/// let err = PalabraError::TokenNotFound {
///     token: "##zzz".to_string(),
/// };
/// assert!(err.to_string().contains("##zzz"));
/// ```
#[derive(Debug)]
pub enum PalabraError {
    /// The same string was supplied twice during vocabulary construction.
    DuplicateToken {
        /// The offending entry
        token: String,
        /// Id already assigned to the first occurrence
        id: u32,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Exact-match vocabulary lookup failed.
    TokenNotFound {
        /// The token that was looked up
        token: String,
    },

    /// A token id has no assigned vocabulary entry.
    IdOutOfRange {
        /// The id that was looked up
        id: u32,
        /// Number of assigned ids
        vocab_size: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for PalabraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PalabraError::DuplicateToken { token, id } => {
                write!(
                    f,
                    "Duplicate vocabulary entry: {token:?} already has id {id}"
                )
            }
            PalabraError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            PalabraError::TokenNotFound { token } => {
                write!(f, "Token not found in vocabulary: {token:?}")
            }
            PalabraError::IdOutOfRange { id, vocab_size } => {
                write!(f, "Id {id} out of range for vocabulary of size {vocab_size}")
            }
            PalabraError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PalabraError {}

impl From<&str> for PalabraError {
    fn from(msg: &str) -> Self {
        PalabraError::Other(msg.to_string())
    }
}

impl From<String> for PalabraError {
    fn from(msg: String) -> Self {
        PalabraError::Other(msg)
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for PalabraError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<PalabraError> for &str {
    fn eq(&self, other: &PalabraError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PalabraError>;
