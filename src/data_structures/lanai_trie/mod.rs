// Copyright (c) 2025 Prefix Heap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Prefix Trie Implementation
//!
//! This module provides a prefix tree storing a set of string keys and
//! answering complete-key and prefix membership queries in time proportional
//! to the key length, independent of how many keys are stored.
//!
//! Nodes are kept in an arena and addressed by index. Each node maps a
//! symbol to its child and carries a terminal flag marking that a complete
//! key ends there.
//!
//! # Example
//!
//! ```
//! use prefix_heap_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! for key in ["cat", "car", "cart"] {
//!     trie.insert(key).unwrap();
//! }
//!
//! assert!(trie.search("car"));
//! assert!(!trie.search("ca"));
//! assert!(trie.starts_with("ca"));
//! assert!(!trie.starts_with("dog"));
//! ```
//!
//! # Alphabets
//!
//! The accepted symbol set is configuration-defined through [`Alphabet`].
//! Inserting a key with a symbol outside the alphabet fails with
//! [`LanaiTrieError::InvalidInput`] and leaves the trie untouched. Lookups
//! never fail: a key that could not have been inserted is simply absent.

mod config;
mod error;
mod node;

use std::borrow::Cow;

use tracing::{debug, trace};

pub use config::{Alphabet, LanaiTrieConfig};
pub use error::{LanaiTrieError, LanaiTrieResult};
use node::{NodeId, TrieNode};

/// Lanai Trie is an arena-backed prefix tree over `char` symbols.
///
/// Key features:
/// * O(key length) insert, search and prefix queries
/// * Configurable alphabet, case folding and maximum key length
/// * Key removal with pruning of dead branches; freed slots are recycled
#[derive(Debug, Clone)]
pub struct LanaiTrie {
    /// Node arena; slot 0 is the root
    nodes: Vec<TrieNode>,

    /// Arena slots released by `remove`, reused by later inserts
    free: Vec<NodeId>,

    /// Number of stored keys
    len: usize,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            free: Vec::new(),
            len: 0,
            config,
        }
    }

    /// Builds a trie containing every key of `keys`.
    ///
    /// Stops at the first key that cannot be inserted and returns its error.
    pub fn from_keys<I, K>(keys: I, config: LanaiTrieConfig) -> LanaiTrieResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut trie = Self::with_config(config);
        for key in keys {
            trie.insert(key)?;
        }
        Ok(trie)
    }

    /// Returns the trie configuration.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Inserts a key into the trie.
    ///
    /// The whole key is validated before any node is created, so a failed
    /// insert leaves the trie unchanged.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The key was not present before.
    /// * `Ok(false)` - The key was already stored; nothing changed.
    /// * `Err(LanaiTrieError)` - The key is empty, too long, or contains a
    ///   symbol outside the alphabet.
    pub fn insert<K>(&mut self, key: K) -> LanaiTrieResult<bool>
    where
        K: AsRef<str>,
    {
        let key = self.normalize(key.as_ref());
        self.validate(&key)?;

        let mut node = NodeId::ROOT;
        for symbol in key.chars() {
            node = match self.nodes[node.0].child(symbol) {
                Some(next) => next,
                None => {
                    let next = self.allocate();
                    self.nodes[node.0].children.insert(symbol, next);
                    next
                }
            };
        }

        let terminal = &mut self.nodes[node.0].is_terminal;
        if *terminal {
            return Ok(false);
        }
        *terminal = true;
        self.len += 1;

        Ok(true)
    }

    /// Returns `true` iff `key` was inserted as a complete key.
    ///
    /// A path that exists only as the prefix of longer keys does not count.
    pub fn search<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let key = self.normalize(key.as_ref());
        self.find_node(&key)
            .map_or(false, |id| self.nodes[id.0].is_terminal)
    }

    /// Returns `true` iff `prefix` is empty or some stored key begins with it.
    pub fn starts_with<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize(prefix.as_ref());
        // The root exists even in an empty trie, so "" always matches.
        self.find_node(&prefix).is_some()
    }

    /// Removes a key, pruning nodes that no longer lead to any key.
    ///
    /// # Returns
    ///
    /// `true` if the key was stored and has been removed, `false` otherwise.
    pub fn remove<K>(&mut self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let key = self.normalize(key.as_ref());

        let mut path = Vec::new();
        let mut node = NodeId::ROOT;
        for symbol in key.chars() {
            match self.nodes[node.0].child(symbol) {
                Some(next) => {
                    path.push((node, symbol));
                    node = next;
                }
                None => return false,
            }
        }

        if !self.nodes[node.0].is_terminal {
            return false;
        }
        self.nodes[node.0].is_terminal = false;
        self.len -= 1;

        let mut pruned = 0usize;
        let mut current = node;
        while let Some((parent, symbol)) = path.pop() {
            if !self.nodes[current.0].is_prunable() {
                break;
            }
            self.nodes[parent.0].children.remove(&symbol);
            self.free.push(current);
            pruned += 1;
            current = parent;
        }
        trace!(pruned, "removed trie key");

        true
    }

    /// Returns every stored key that begins with `prefix`, sorted.
    pub fn keys_with_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize(prefix.as_ref());
        let mut result = Vec::new();

        if let Some(start) = self.find_node(&prefix) {
            let mut buffer = prefix.into_owned();
            self.collect_keys(start, &mut buffer, &mut result);
        }

        result.sort_unstable();
        result
    }

    /// Returns the number of stored keys that begin with `prefix`.
    pub fn count_with_prefix<P>(&self, prefix: P) -> usize
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize(prefix.as_ref());
        self.find_node(&prefix)
            .map_or(0, |start| self.count_keys(start))
    }

    /// Returns the longest stored key that is a prefix of `text`.
    pub fn longest_prefix_of<T>(&self, text: T) -> Option<String>
    where
        T: AsRef<str>,
    {
        let text = self.normalize(text.as_ref());

        let mut best = None;
        let mut node = NodeId::ROOT;
        for (offset, symbol) in text.char_indices() {
            match self.nodes[node.0].child(symbol) {
                Some(next) => node = next,
                None => break,
            }
            if self.nodes[node.0].is_terminal {
                best = Some(offset + symbol.len_utf8());
            }
        }

        best.map(|end| text[..end].to_string())
    }

    /// Returns the number of keys in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Removes every key and releases the arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::new());
        self.free.clear();
        self.len = 0;
    }

    /// Applies case folding according to the configuration.
    fn normalize<'a>(&self, key: &'a str) -> Cow<'a, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(key.to_lowercase())
        }
    }

    /// Checks a normalized key against the emptiness, depth and alphabet rules.
    fn validate(&self, key: &str) -> LanaiTrieResult<()> {
        if key.is_empty() {
            return Err(LanaiTrieError::EmptyKey);
        }

        let length = key.chars().count();
        if length > self.config.max_depth {
            return Err(LanaiTrieError::KeyTooLong {
                length,
                max_depth: self.config.max_depth,
            });
        }

        let alphabet = &self.config.alphabet;
        if let Some((position, symbol)) = key
            .chars()
            .enumerate()
            .find(|(_, symbol)| !alphabet.contains(*symbol))
        {
            debug!(
                ?symbol,
                position,
                alphabet = alphabet.name(),
                "rejecting key with unsupported symbol"
            );
            return Err(LanaiTrieError::InvalidInput {
                symbol,
                position,
                alphabet: alphabet.name().to_string(),
            });
        }

        Ok(())
    }

    /// Walks from the root along `key`, returning the node it ends at.
    fn find_node(&self, key: &str) -> Option<NodeId> {
        let mut node = NodeId::ROOT;
        for symbol in key.chars() {
            node = self.nodes[node.0].child(symbol)?;
        }
        Some(node)
    }

    /// Takes a recycled slot if one exists, otherwise grows the arena.
    fn allocate(&mut self) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = TrieNode::new();
                id
            }
            None => {
                self.nodes.push(TrieNode::new());
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Depth-first walk below `start`, appending every terminal path to
    /// `result`. Iterative so key length is bounded by `max_depth` only.
    fn collect_keys(&self, start: NodeId, buffer: &mut String, result: &mut Vec<String>) {
        let mut pending: Vec<(NodeId, usize, Option<char>)> = vec![(start, buffer.len(), None)];

        while let Some((node, parent_len, symbol)) = pending.pop() {
            buffer.truncate(parent_len);
            if let Some(symbol) = symbol {
                buffer.push(symbol);
            }

            let current = &self.nodes[node.0];
            if current.is_terminal {
                result.push(buffer.clone());
            }

            let len = buffer.len();
            pending.extend(
                current
                    .children
                    .iter()
                    .map(|(&symbol, &child)| (child, len, Some(symbol))),
            );
        }
    }

    fn count_keys(&self, start: NodeId) -> usize {
        let mut pending = vec![start];
        let mut count = 0;

        while let Some(node) = pending.pop() {
            let current = &self.nodes[node.0];
            count += usize::from(current.is_terminal);
            pending.extend(current.children.values().copied());
        }
        count
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}
