//! Priority/payload pairs for the Molokai Heap.

use std::cmp::Ordering;

/// A payload carried at a given priority.
///
/// Equality and ordering look at `priority` only, so payloads need not be
/// comparable and entries with equal priority compare equal.
#[derive(Debug, Clone, Copy)]
pub struct PriorityEntry<P, V> {
    /// Ordering key
    pub priority: P,
    /// Value carried along with the priority
    pub payload: V,
}

impl<P, V> PriorityEntry<P, V> {
    /// Creates a new entry.
    pub fn new(priority: P, payload: V) -> Self {
        Self { priority, payload }
    }

    /// Splits the entry into its priority and payload.
    pub fn into_parts(self) -> (P, V) {
        (self.priority, self.payload)
    }
}

impl<P: PartialEq, V> PartialEq for PriorityEntry<P, V> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<P: Eq, V> Eq for PriorityEntry<P, V> {}

impl<P: Ord, V> PartialOrd for PriorityEntry<P, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, V> Ord for PriorityEntry<P, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

impl<P, V> From<(P, V)> for PriorityEntry<P, V> {
    fn from((priority, payload): (P, V)) -> Self {
        Self::new(priority, payload)
    }
}
