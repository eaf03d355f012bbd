//! Lookup request errors.
//!
//! These map onto the two user-facing failure codes of a lookup endpoint:
//! malformed input (bad request) and an unknown word (not found).

use thiserror::Error;

/// Errors returned by the lookup service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The word is not made of the accepted number of lowercase letters.
    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    /// The prefix is not made of the accepted number of lowercase letters.
    #[error("Invalid prefix: {0:?}")]
    InvalidPrefix(String),

    /// The word is not stored, or has never been searched for.
    #[error("Word not found: {0}")]
    NotFound(String),
}

impl LookupError {
    /// Whether the error stems from malformed input rather than a missing word.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::InvalidWord(_) | Self::InvalidPrefix(_))
    }
}
