// Copyright (c) 2025 Kupu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix index.
//!
//! Each node stands for one character position along some stored word.
//! Children are owned exclusively by their parent, so dropping the root
//! discards the whole tree.

use std::sync::atomic::{AtomicU64, Ordering};

use fnv::FnvHashMap;

/// A node in the prefix index.
#[derive(Debug, Default)]
pub struct IndexNode {
    /// Map of characters to child nodes
    pub children: FnvHashMap<char, Box<IndexNode>>,

    /// Whether the path from the root to this node is a stored word
    pub is_terminal: bool,

    /// Successful lookups of the word ending here. Only meaningful when terminal.
    hit_count: AtomicU64,
}

impl IndexNode {
    /// Creates a new empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child for `c`, creating it if it does not exist yet.
    pub fn child_or_insert(&mut self, c: char) -> &mut IndexNode {
        self.children.entry(c).or_default()
    }

    /// Returns the child for `c`, if any.
    pub fn child(&self, c: char) -> Option<&IndexNode> {
        self.children.get(&c).map(|child| &**child)
    }

    /// Records one hit and returns the new count.
    pub fn record_hit(&self) -> u64 {
        self.hit_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current hit count.
    pub fn hits(&self) -> u64 {
        self.hit_count.load(Ordering::Relaxed)
    }
}
