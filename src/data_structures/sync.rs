// Copyright (c) 2025 Prefix Heap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lock-guarded handles for sharing the collections across threads.
//!
//! Neither [`LanaiTrie`] nor [`MolokaiHeap`] is safe for concurrent
//! mutation on its own. The handles here put a single lock around the whole
//! structure and forward each operation, so every call observes the
//! structure in a valid state.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieResult};
use super::molokai_heap::{HeapOrder, MolokaiHeap, MolokaiHeapResult};

/// A [`LanaiTrie`] behind a reader-writer lock.
///
/// Lookups share the lock; inserts, removals and clears take it
/// exclusively. Cloning the handle shares the same trie.
#[derive(Debug, Clone, Default)]
pub struct SharedLanaiTrie {
    inner: Arc<RwLock<LanaiTrie>>,
}

impl SharedLanaiTrie {
    /// Wraps an existing trie.
    pub fn new(trie: LanaiTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Creates a shared, empty trie with the given configuration.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self::new(LanaiTrie::with_config(config))
    }

    /// See [`LanaiTrie::insert`].
    pub fn insert<K: AsRef<str>>(&self, key: K) -> LanaiTrieResult<bool> {
        self.inner.write().insert(key)
    }

    /// See [`LanaiTrie::search`].
    pub fn search<K: AsRef<str>>(&self, key: K) -> bool {
        self.inner.read().search(key)
    }

    /// See [`LanaiTrie::starts_with`].
    pub fn starts_with<P: AsRef<str>>(&self, prefix: P) -> bool {
        self.inner.read().starts_with(prefix)
    }

    /// See [`LanaiTrie::remove`].
    pub fn remove<K: AsRef<str>>(&self, key: K) -> bool {
        self.inner.write().remove(key)
    }

    /// See [`LanaiTrie::keys_with_prefix`].
    pub fn keys_with_prefix<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        self.inner.read().keys_with_prefix(prefix)
    }

    /// See [`LanaiTrie::len`].
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// See [`LanaiTrie::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// See [`LanaiTrie::clear`].
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Runs `f` with shared access to the whole trie, for compound reads.
    pub fn read<R>(&self, f: impl FnOnce(&LanaiTrie) -> R) -> R {
        f(&self.inner.read())
    }
}

/// A [`MolokaiHeap`] behind a mutex.
///
/// `peek` takes the same lock as `pop`; use [`SharedMolokaiHeap::with`]
/// when a peek and the following pop must observe the same root.
#[derive(Debug)]
pub struct SharedMolokaiHeap<T> {
    inner: Arc<Mutex<MolokaiHeap<T>>>,
}

impl<T> Clone for SharedMolokaiHeap<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Ord> SharedMolokaiHeap<T> {
    /// Wraps an existing heap.
    pub fn new(heap: MolokaiHeap<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(heap)),
        }
    }

    /// Creates a shared, empty heap with the given direction.
    pub fn with_order(order: HeapOrder) -> Self {
        Self::new(MolokaiHeap::with_order(order))
    }

    /// See [`MolokaiHeap::push`].
    pub fn push(&self, value: T) {
        self.inner.lock().push(value);
    }

    /// See [`MolokaiHeap::pop`].
    pub fn pop(&self) -> MolokaiHeapResult<T> {
        self.inner.lock().pop()
    }

    /// Returns a copy of the root. See [`MolokaiHeap::peek`].
    pub fn peek(&self) -> MolokaiHeapResult<T>
    where
        T: Clone,
    {
        self.inner.lock().peek().cloned()
    }

    /// See [`MolokaiHeap::len`].
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// See [`MolokaiHeap::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `f` with exclusive access to the heap, for compound operations.
    pub fn with<R>(&self, f: impl FnOnce(&mut MolokaiHeap<T>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<T: Ord> Default for SharedMolokaiHeap<T> {
    fn default() -> Self {
        Self::new(MolokaiHeap::new())
    }
}
