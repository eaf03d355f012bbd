// Copyright (c) 2025 Kupu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Index Implementation
//!
//! A character trie that stores a vocabulary and answers three kinds of
//! questions about it: does a word exist, how popular is it, and which
//! stored words start with a given prefix.
//!
//! Popularity is recorded implicitly: every successful [`PrefixIndex::search`]
//! counts as one hit for the word, and [`PrefixIndex::rank`] reports the
//! number of hits so far. Structural mutation (`insert`, `reset`) takes
//! `&mut self`, while lookups take `&self` and may run from many threads at
//! once on a shared index.
//!
//! # Example
//!
//! ```
//! use kupu_lib::data_structures::prefix_index::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! index.insert("cat");
//! index.insert("car");
//!
//! assert_eq!(index.rank("car"), 0);
//! assert!(index.search("car"));
//! assert_eq!(index.rank("car"), 1);
//!
//! let mut suggestions = index.prefix_query("ca");
//! suggestions.sort();
//! assert_eq!(suggestions, vec!["car", "cat"]);
//! ```

mod node;

use node::IndexNode;

/// Prefix index over a vocabulary of words.
///
/// Suggestion order follows the iteration order of each node's child map and
/// is not lexicographic. Callers that need sorted output must sort it.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    /// The root node, standing for the empty sequence. Never terminal.
    root: IndexNode,

    /// Number of distinct stored words
    word_count: usize,
}

impl PrefixIndex {
    /// Creates a new empty `PrefixIndex`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word, creating nodes for every novel character position.
    ///
    /// Re-inserting a stored word leaves the tree and its hit count untouched.
    /// The empty word is ignored, since the root is never terminal.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }

        let node = word
            .chars()
            .fold(&mut self.root, |node, c| node.child_or_insert(c));

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        if is_new {
            self.word_count += 1;
        }
        is_new
    }

    /// Checks whether a word is stored, recording a hit if it is.
    ///
    /// A word that is only a prefix of stored words is not found and gains
    /// no hit.
    pub fn search<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        match self.terminal(word.as_ref()) {
            Some(node) => {
                node.record_hit();
                true
            }
            None => false,
        }
    }

    /// Returns how many successful searches a stored word has received.
    ///
    /// Unknown words and non-terminal prefixes report 0. This never changes
    /// the count.
    pub fn rank<W>(&self, word: W) -> u64
    where
        W: AsRef<str>,
    {
        self.terminal(word.as_ref()).map_or(0, IndexNode::hits)
    }

    /// Collects every stored word that starts with `prefix`, including the
    /// prefix itself when it is stored.
    ///
    /// Results come out in depth-first order. An unknown prefix yields an
    /// empty list; the empty prefix yields the whole vocabulary.
    pub fn prefix_query<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        let mut buffer = String::from(prefix);
        Self::collect_words(start, &mut buffer, &mut results);
        results
    }

    /// Discards every stored word and its hit count.
    pub fn reset(&mut self) {
        self.root = IndexNode::new();
        self.word_count = 0;
    }

    /// Returns the number of distinct stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Walks the tree along `word`, returning the node it ends on.
    fn find(&self, word: &str) -> Option<&IndexNode> {
        word.chars().try_fold(&self.root, |node, c| node.child(c))
    }

    /// Like [`find`](Self::find), but only yields terminal nodes.
    fn terminal(&self, word: &str) -> Option<&IndexNode> {
        self.find(word).filter(|node| node.is_terminal)
    }

    /// Depth-first collection of every terminal node under `node`.
    ///
    /// `buffer` holds the characters from the root to `node` and is restored
    /// before returning. Recursion depth is bounded by the longest stored word.
    fn collect_words(node: &IndexNode, buffer: &mut String, results: &mut Vec<String>) {
        if node.is_terminal {
            results.push(buffer.clone());
        }

        for (c, child) in &node.children {
            buffer.push(*c);
            Self::collect_words(child, buffer, results);
            buffer.pop();
        }
    }
}

impl<W: AsRef<str>> Extend<W> for PrefixIndex {
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<W: AsRef<str>> FromIterator<W> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        let mut index = Self::new();
        index.extend(words);
        index
    }
}
