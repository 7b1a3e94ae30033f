// Copyright (c) 2025 Prefix Heap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Molokai Binary Heap Implementation
//!
//! A priority queue stored as a binary tree in array layout: the element at
//! position `i` has its children at `2i + 1` and `2i + 2`. The ordering
//! direction is an explicit [`HeapOrder`] chosen at construction, so a
//! max-heap needs no negated keys.
//!
//! # Example
//!
//! ```
//! use prefix_heap_lib::data_structures::molokai_heap::{HeapOrder, MolokaiHeap};
//!
//! let mut heap = MolokaiHeap::heapify(vec![5, 3, 8, 1], HeapOrder::Min);
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(8));
//! assert!(heap.pop().is_err());
//! ```
//!
//! # Invariant
//!
//! Every public call leaves the heap valid: each parent ranks before or
//! equal to its children under the heap's order. Elements that compare
//! equal are popped in an unspecified relative order.

mod config;
mod entry;
mod error;

use std::mem;

use tracing::trace;

pub use config::{HeapOrder, MolokaiHeapConfig};
pub use entry::PriorityEntry;
pub use error::{MolokaiHeapError, MolokaiHeapResult};

/// Binary heap priority queue with a configurable ordering direction.
///
/// # Type Parameters
///
/// * `T` - Type of the stored elements. Use [`PriorityEntry`] to attach a
///   payload that should not take part in the ordering.
#[derive(Debug, Clone)]
pub struct MolokaiHeap<T> {
    /// Elements in heap order
    data: Vec<T>,

    /// Ordering direction
    order: HeapOrder,
}

impl<T: Ord> MolokaiHeap<T> {
    /// Creates an empty min-heap.
    pub fn new() -> Self {
        Self::with_order(HeapOrder::Min)
    }

    /// Creates an empty heap with the given ordering direction.
    pub fn with_order(order: HeapOrder) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap from a configuration.
    pub fn with_config(config: MolokaiHeapConfig) -> Self {
        Self {
            data: Vec::with_capacity(config.initial_capacity),
            order: config.order,
        }
    }

    /// Builds a valid heap from an arbitrary sequence in O(n).
    ///
    /// The resulting layout satisfies the heap invariant but is generally
    /// not sorted.
    pub fn heapify(sequence: Vec<T>, order: HeapOrder) -> Self {
        let mut heap = Self {
            data: sequence,
            order,
        };
        heap.rebuild();
        trace!(len = heap.data.len(), ?order, "heapified sequence");
        heap
    }

    /// Returns the ordering direction of this heap.
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Adds a value, restoring the invariant by sifting it up.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns the root element.
    ///
    /// # Errors
    ///
    /// Returns [`MolokaiHeapError::EmptyCollection`] if the heap has no
    /// elements.
    pub fn pop(&mut self) -> MolokaiHeapResult<T> {
        let last = self.data.pop().ok_or(MolokaiHeapError::EmptyCollection)?;
        if self.data.is_empty() {
            return Ok(last);
        }

        let root = mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Ok(root)
    }

    /// Returns the root element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`MolokaiHeapError::EmptyCollection`] if the heap has no
    /// elements.
    pub fn peek(&self) -> MolokaiHeapResult<&T> {
        self.data.first().ok_or(MolokaiHeapError::EmptyCollection)
    }

    /// Pushes `value` and then pops the root, in a single sift.
    ///
    /// Returns `value` itself when it would become the root.
    pub fn push_pop(&mut self, value: T) -> T {
        match self.data.first() {
            Some(root) if self.order.ranks_before(root, &value) => {
                let root = mem::replace(&mut self.data[0], value);
                self.sift_down(0);
                root
            }
            _ => value,
        }
    }

    /// Pops the root and then pushes `value`, in a single sift.
    ///
    /// # Errors
    ///
    /// Returns [`MolokaiHeapError::EmptyCollection`] if the heap has no
    /// elements; `value` is dropped in that case.
    pub fn replace(&mut self, value: T) -> MolokaiHeapResult<T> {
        let root = self
            .data
            .first_mut()
            .ok_or(MolokaiHeapError::EmptyCollection)?;
        let previous = mem::replace(root, value);
        self.sift_down(0);
        Ok(previous)
    }

    /// Consumes the heap, returning its elements in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Consumes the heap, returning the backing vector in heap layout.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterates over the elements in arbitrary (heap layout) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns whether every parent ranks before or equal to its children.
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|child| {
            let parent = (child - 1) / 2;
            !self.order.ranks_before(&self.data[child], &self.data[parent])
        })
    }

    /// Restores the invariant over the whole backing vector.
    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Moves the element at `index` towards the root while it ranks before
    /// its parent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.order.ranks_before(&self.data[index], &self.data[parent]) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` towards the leaves while a child ranks
    /// before it. Of two children, the one ranking first is chosen; on a
    /// tie the left child wins.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len
                && self.order.ranks_before(&self.data[right], &self.data[left])
            {
                right
            } else {
                left
            };

            if !self.order.ranks_before(&self.data[child], &self.data[index]) {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }
}

impl<T: Ord> Default for MolokaiHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MolokaiHeap<T> {
    /// Heapifies the vector as a min-heap.
    fn from(sequence: Vec<T>) -> Self {
        Self::heapify(sequence, HeapOrder::Min)
    }
}

impl<T: Ord> FromIterator<T> for MolokaiHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for MolokaiHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a MolokaiHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Returns the `k` smallest elements of `iter` in ascending order.
///
/// Keeps a bounded max-heap of at most `k` elements, so memory stays O(k).
pub fn smallest_k<T, I>(iter: I, k: usize) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut sorted = bounded_extremes(iter, k, HeapOrder::Max).into_sorted_vec();
    sorted.reverse();
    sorted
}

/// Returns the `k` largest elements of `iter` in descending order.
pub fn largest_k<T, I>(iter: I, k: usize) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut sorted = bounded_extremes(iter, k, HeapOrder::Min).into_sorted_vec();
    sorted.reverse();
    sorted
}

/// Keeps the `k` elements that would be evicted last from a heap of
/// direction `evict`.
fn bounded_extremes<T, I>(iter: I, k: usize, evict: HeapOrder) -> MolokaiHeap<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut heap = MolokaiHeap::with_config(
        MolokaiHeapConfig::new()
            .with_order(evict)
            .with_initial_capacity(k),
    );
    if k == 0 {
        return heap;
    }

    for value in iter {
        if heap.len() < k {
            heap.push(value);
        } else {
            heap.push_pop(value);
        }
    }
    heap
}
