//! Kupu Word Index Library
//!
//! Kupu stores a vocabulary loaded from an uploaded word list and answers
//! three kinds of queries about it: whether a word exists, how popular it
//! is, and which words start with a prefix.
//!
//! # Architecture
//!
//! - [`data_structures::PrefixIndex`] is the trie at the core. It never fails;
//!   unknown words simply yield `false`, `0`, or an empty list.
//! - [`service::IndexHandle`] shares the current index between request
//!   handlers and swaps in rebuilt indexes atomically.
//! - [`service::VocabularyLoader`] and [`service::LookupService`] validate
//!   input on the way in so the index only sees well-formed words.
//! - [`shell::Shell`] interprets the line-oriented commands of the CLI.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod service;
pub mod shell;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Kupu.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
