// Copyright (c) 2025 Prefix Heap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ordering direction and configuration for the Molokai Heap.

use serde::{Deserialize, Serialize};

/// Which end of the ordering sits at the root of the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeapOrder {
    /// Every parent is less than or equal to its children
    #[default]
    Min,
    /// Every parent is greater than or equal to its children
    Max,
}

impl HeapOrder {
    /// Returns `true` when `a` must sit strictly above `b` in the heap.
    #[inline]
    pub fn ranks_before<T: Ord + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            Self::Min => a < b,
            Self::Max => a > b,
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Min => Self::Max,
            Self::Max => Self::Min,
        }
    }
}

/// Configuration for the Molokai Heap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MolokaiHeapConfig {
    /// Ordering direction
    pub order: HeapOrder,

    /// Number of elements to reserve space for up front
    pub initial_capacity: usize,
}

impl MolokaiHeapConfig {
    /// Creates a new configuration with default values (min-heap, no
    /// preallocation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ordering direction.
    pub fn with_order(mut self, order: HeapOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the initial capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_before() {
        assert!(HeapOrder::Min.ranks_before(&1, &2));
        assert!(!HeapOrder::Min.ranks_before(&2, &2));
        assert!(HeapOrder::Max.ranks_before(&2, &1));
        assert!(!HeapOrder::Max.ranks_before(&2, &2));
        assert_eq!(HeapOrder::Min.reversed(), HeapOrder::Max);
    }

    #[test]
    fn test_order_serde_names() {
        assert_eq!(serde_json::to_string(&HeapOrder::Max).unwrap(), "\"max\"");
        let parsed: HeapOrder = serde_json::from_str("\"min\"").unwrap();
        assert_eq!(parsed, HeapOrder::Min);
    }
}
