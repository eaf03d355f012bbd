//! Vocabulary loader.
//!
//! Turns an uploaded newline-delimited word list into a fresh prefix index.
//! Each line is trimmed and lowercased; blank lines are skipped, lines that
//! are not an accepted word are counted as invalid, and every other line is
//! inserted. LF, CRLF and lone CR line endings are all accepted.
//!
//! The new index is built completely before it replaces the live one, and
//! every upload-level check runs before building starts. A rejected upload
//! therefore leaves the previous vocabulary fully queryable.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::IndexHandle;
use crate::config::vocabulary::VocabularyConfig;
use crate::data_structures::PrefixIndex;
use crate::error::load::LoadError;

/// Outcome of a successful word list load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Lines accepted as words, duplicates included
    pub valid_count: usize,

    /// Non-blank lines rejected by validation
    pub invalid_count: usize,

    /// Distinct words in the new index
    pub word_count: usize,
}

/// Rebuilds the shared index from uploaded word lists.
#[derive(Debug, Clone)]
pub struct VocabularyLoader {
    config: VocabularyConfig,
    handle: IndexHandle,
}

impl VocabularyLoader {
    /// Creates a loader that installs new vocabularies into `handle`.
    pub fn new(config: VocabularyConfig, handle: IndexHandle) -> Self {
        Self { config, handle }
    }

    /// The handle this loader installs into.
    pub fn handle(&self) -> &IndexHandle {
        &self.handle
    }

    /// Reads a word list file and loads it.
    pub async fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "Read word list");
        self.load_bytes(&bytes)
    }

    /// Loads a raw upload after checking its size.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so a damaged line only
    /// fails word validation instead of rejecting the whole upload.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<LoadReport, LoadError> {
        if bytes.is_empty() {
            warn!("Rejected empty word list upload");
            return Err(LoadError::EmptyUpload);
        }

        if bytes.len() > self.config.max_upload_bytes {
            warn!(
                size = bytes.len(),
                limit = self.config.max_upload_bytes,
                "Rejected oversized word list upload"
            );
            return Err(LoadError::TooLarge {
                size: bytes.len(),
                limit: self.config.max_upload_bytes,
            });
        }

        let text = String::from_utf8_lossy(bytes);
        Ok(self.load_text(&text))
    }

    /// Loads already decoded word list text.
    pub fn load_text(&self, text: &str) -> LoadReport {
        let (index, report) = self.build(text);
        self.handle.replace(index);
        debug!(
            valid = report.valid_count,
            invalid = report.invalid_count,
            words = report.word_count,
            "Loaded word list"
        );
        report
    }

    /// Builds a new index from `text` without touching the live one.
    ///
    /// A leading byte-order mark is ignored.
    pub fn build(&self, text: &str) -> (PrefixIndex, LoadReport) {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut index = PrefixIndex::new();

        let mut valid_count = 0;
        let mut invalid_count = 0;

        for line in text.split(['\r', '\n']) {
            let word = line.trim().to_lowercase();
            if word.is_empty() {
                continue;
            }

            if self.config.accepts(&word) {
                index.insert(&word);
                valid_count += 1;
            } else {
                invalid_count += 1;
            }
        }

        let report = LoadReport {
            valid_count,
            invalid_count,
            word_count: index.len(),
        };
        (index, report)
    }
}
