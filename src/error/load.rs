//! Word list loading errors.
//!
//! A load fails as a whole before the live index is touched, so every
//! variant here leaves the previously loaded vocabulary in place.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a word list.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The upload contained no bytes at all.
    #[error("No word list uploaded")]
    EmptyUpload,

    /// The upload is larger than the configured limit.
    #[error("Word list of {size} bytes exceeds the limit of {limit} bytes")]
    TooLarge {
        /// Size of the rejected upload in bytes
        size: usize,
        /// Configured maximum in bytes
        limit: usize,
    },

    /// The word list file could not be read.
    #[error("Failed to read word list {path:?}: {source}")]
    Io {
        /// Path of the word list
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}
