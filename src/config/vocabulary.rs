//! Vocabulary configuration module.
//!
//! Controls which lines of an uploaded word list become stored words and
//! how large an upload may be.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Shortest accepted word, in letters
    pub min_word_len: usize,

    /// Longest accepted word, in letters
    pub max_word_len: usize,

    /// Largest accepted upload in bytes
    pub max_upload_bytes: usize,

    /// Word list loaded when none is given on the command line
    pub word_list: Option<PathBuf>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            min_word_len: 2,
            max_word_len: 50,
            max_upload_bytes: 2 * 1024 * 1024, // 2 MiB
            word_list: None,
        }
    }
}

impl VocabularyConfig {
    /// Checks that `word` has an accepted length and only lowercase ASCII letters.
    pub fn accepts(&self, word: &str) -> bool {
        is_lowercase_word(word, self.min_word_len, self.max_word_len)
    }
}

/// Checks that `text` is `min..=max` lowercase ASCII letters.
pub(crate) fn is_lowercase_word(text: &str, min: usize, max: usize) -> bool {
    // ASCII only, so byte length equals letter count
    (min..=max).contains(&text.len()) && text.bytes().all(|b| b.is_ascii_lowercase())
}

impl Validate for VocabularyConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.min_word_len == 0 {
            return Err(ConfigError::ValidationError(
                "min_word_len must be greater than 0".to_string(),
            ));
        }

        if self.max_word_len < self.min_word_len {
            return Err(ConfigError::ValueOutOfRange {
                key: "vocabulary.max_word_len".to_string(),
                message: format!(
                    "must be at least min_word_len ({}), got {}",
                    self.min_word_len, self.max_word_len
                ),
            });
        }

        if self.max_upload_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_upload_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
