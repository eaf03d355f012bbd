//! Data structures for Kupu.
//!
//! This module contains the in-memory structures that back the word
//! service. Structural mutation needs exclusive access; reads are safe to
//! share across threads.

pub mod prefix_index;

// Re-export common data structures
pub use prefix_index::PrefixIndex;
