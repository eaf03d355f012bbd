//! Lookup service.
//!
//! Request-side collaborator of the prefix index. Every query is lowercased,
//! truncated and validated here, so the index only ever sees well-formed
//! input. Responses are serializable and mirror the JSON bodies of a lookup
//! endpoint.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::IndexHandle;
use crate::config::lookup::LookupConfig;
use crate::config::vocabulary::{is_lowercase_word, VocabularyConfig};
use crate::error::lookup::LookupError;

/// Response to an existence query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The normalized word that was looked up
    pub word: String,

    /// Whether the word is stored
    pub exists: bool,

    /// Rank after this lookup was counted, present only if the word exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u64>,
}

/// Response to a rank query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankResponse {
    /// The normalized word that was looked up
    pub word: String,

    /// Number of successful searches for the word
    pub rank: u64,
}

/// Response to a suggestion query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestResponse {
    /// Stored words starting with the prefix
    pub suggestions: Vec<String>,
}

/// Validates lookup requests and answers them from the current index.
#[derive(Debug, Clone)]
pub struct LookupService {
    vocabulary: VocabularyConfig,
    lookup: LookupConfig,
    handle: IndexHandle,
}

impl LookupService {
    /// Creates a lookup service reading from `handle`.
    pub fn new(vocabulary: VocabularyConfig, lookup: LookupConfig, handle: IndexHandle) -> Self {
        Self {
            vocabulary,
            lookup,
            handle,
        }
    }

    /// Checks whether a word exists, counting the lookup towards its rank.
    pub fn search(&self, word: &str) -> Result<SearchResponse, LookupError> {
        let word = self.normalize_word(word)?;
        let index = self.handle.current();

        let exists = index.search(&word);
        let rank = exists.then(|| index.rank(&word));
        debug!(%word, exists, "Search");

        Ok(SearchResponse { word, exists, rank })
    }

    /// Reports how often a word has been found.
    ///
    /// A word with no recorded hits is reported as not found, whether or not
    /// it is stored.
    pub fn rank(&self, word: &str) -> Result<RankResponse, LookupError> {
        let word = self.normalize_word(word)?;
        match self.handle.current().rank(&word) {
            0 => Err(LookupError::NotFound(word)),
            rank => Ok(RankResponse { word, rank }),
        }
    }

    /// Lists stored words starting with `prefix`.
    pub fn suggest(&self, prefix: &str) -> Result<SuggestResponse, LookupError> {
        let prefix = normalize(prefix, self.lookup.max_prefix_len);
        if !is_lowercase_word(&prefix, self.lookup.min_prefix_len, self.lookup.max_prefix_len) {
            return Err(LookupError::InvalidPrefix(prefix));
        }

        let mut suggestions = self.handle.current().prefix_query(&prefix);
        if self.lookup.sort_suggestions {
            suggestions.sort_unstable();
        }
        debug!(%prefix, count = suggestions.len(), "Suggest");

        Ok(SuggestResponse { suggestions })
    }

    fn normalize_word(&self, word: &str) -> Result<String, LookupError> {
        let word = normalize(word, self.vocabulary.max_word_len);
        if self.vocabulary.accepts(&word) {
            Ok(word)
        } else {
            Err(LookupError::InvalidWord(word))
        }
    }
}

/// Lowercases `input` and keeps at most `max_len` characters.
fn normalize(input: &str, max_len: usize) -> String {
    input.to_lowercase().chars().take(max_len).collect()
}
