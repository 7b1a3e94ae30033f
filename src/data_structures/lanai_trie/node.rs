//! Node storage for the Lanai Trie.
//!
//! Nodes live in an arena owned by the trie and refer to their children by
//! index, so no node ever holds a pointer into another.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Index of a node inside the trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root always occupies the first arena slot.
    pub(crate) const ROOT: NodeId = NodeId(0);
}

/// A node in the Lanai Trie.
///
/// Each node represents one symbol position in some stored key.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Map of symbols to child nodes
    pub(crate) children: HashMap<char, NodeId, FnvBuildHasher>,

    /// Whether a complete key ends at this node
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached through `symbol`, if any.
    pub(crate) fn child(&self, symbol: char) -> Option<NodeId> {
        self.children.get(&symbol).copied()
    }

    /// A node is prunable when no key ends at it or below it.
    pub(crate) fn is_prunable(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }
}
