// Copyright (c) 2025 Prefix Heap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Molokai Heap.

/// Error types for Molokai Heap operations
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum MolokaiHeapError {
    /// `pop`, `peek` or `replace` was called on a heap with no elements
    #[error("Heap is empty")]
    EmptyCollection,
}

/// Result type for Molokai Heap operations
pub type MolokaiHeapResult<T> = Result<T, MolokaiHeapError>;
