//! Word service built around the prefix index.
//!
//! The index itself is a plain value. This module owns the "current index"
//! reference shared by request handlers and the two collaborators that call
//! into it: the [`VocabularyLoader`] that rebuilds the index from an uploaded
//! word list, and the [`LookupService`] that validates requests before they
//! reach the index.

pub mod loader;
pub mod lookup;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::data_structures::PrefixIndex;

pub use loader::{LoadReport, VocabularyLoader};
pub use lookup::{LookupService, RankResponse, SearchResponse, SuggestResponse};

/// Shared handle to the current prefix index.
///
/// Readers take a snapshot with [`current`](Self::current) and walk it without
/// holding any lock. A rebuild constructs a complete index elsewhere and
/// installs it with [`replace`](Self::replace), so readers only ever see a
/// fully old or a fully new vocabulary.
#[derive(Debug, Clone, Default)]
pub struct IndexHandle {
    current: Arc<RwLock<Arc<PrefixIndex>>>,
}

impl IndexHandle {
    /// Creates a handle holding an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle holding `index`.
    pub fn with_index(index: PrefixIndex) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(index))),
        }
    }

    /// Returns a snapshot of the current index.
    pub fn current(&self) -> Arc<PrefixIndex> {
        Arc::clone(&self.current.read())
    }

    /// Installs a fully built index and returns the one it replaces.
    pub fn replace(&self, index: PrefixIndex) -> Arc<PrefixIndex> {
        let words = index.len();
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(index));
        tracing::info!(words, "Installed new prefix index");
        previous
    }
}
