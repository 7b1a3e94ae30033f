//! Collections provided by the crate.
//!
//! Two independent, single-threaded, in-memory structures:
//! - [`lanai_trie`]: a prefix tree answering key and prefix membership
//! - [`molokai_heap`]: a binary heap priority queue with explicit ordering
//!
//! [`sync`] wraps either one in a lock for callers that need to share it
//! between threads.

pub mod lanai_trie;
pub mod molokai_heap;
pub mod sync;

// Re-export common data structures
pub use lanai_trie::{Alphabet, LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult};
pub use molokai_heap::{
    HeapOrder, MolokaiHeap, MolokaiHeapConfig, MolokaiHeapError, MolokaiHeapResult,
    PriorityEntry,
};
pub use sync::{SharedLanaiTrie, SharedMolokaiHeap};
