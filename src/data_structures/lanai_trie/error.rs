// Copyright (c) 2025 Prefix Heap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lanai prefix trie.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// A key contains a symbol outside the configured alphabet.
    #[error("Invalid input: symbol {symbol:?} at position {position} is not in the {alphabet} alphabet")]
    InvalidInput {
        /// The offending symbol.
        symbol: char,
        /// Zero-based symbol position inside the key.
        position: usize,
        /// Name of the alphabet that rejected the symbol.
        alphabet: String,
    },

    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key exceeds the maximum depth allowed.
    #[error("Key of {length} symbols exceeds maximum trie depth of {max_depth}")]
    KeyTooLong {
        /// Number of symbols in the rejected key.
        length: usize,
        /// The maximum allowed depth.
        max_depth: usize,
    },
}

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;
