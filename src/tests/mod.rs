//! Test modules for Kupu.
//!
//! This module contains the cross-component tests of the crate:
//! - Property-based tests of the prefix index using proptest
//! - Configuration loading and validation tests
//! - Error type and error reporting tests
//! - Shared fixtures and strategies


pub use test_utils::{create_test_dir, vocabulary_strategy, word_strategy, TestFixture};
