// Copyright (c) 2025 Prefix Heap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the public collection API.

use std::sync::{Arc, Barrier};
use std::thread;

use prefix_heap_lib::data_structures::{
    Alphabet, HeapOrder, LanaiTrie, LanaiTrieConfig, LanaiTrieError, MolokaiHeap,
    MolokaiHeapError, PriorityEntry, SharedLanaiTrie, SharedMolokaiHeap,
};

#[test]
fn test_trie_scenario() {
    let mut trie = LanaiTrie::new();
    for key in ["cat", "car", "cart"] {
        assert_eq!(trie.insert(key), Ok(true));
    }

    assert!(trie.search("car"));
    assert!(!trie.search("ca"));
    assert!(trie.starts_with("ca"));
    assert!(!trie.starts_with("dog"));
    assert!(trie.starts_with(""));
    assert_eq!(trie.keys_with_prefix("car"), vec!["car", "cart"]);
}

#[test]
fn test_trie_rejects_symbols_outside_alphabet() {
    let mut trie = LanaiTrie::with_config(
        LanaiTrieConfig::new().with_alphabet(Alphabet::AsciiAlphanumeric),
    );

    assert!(matches!(
        trie.insert("user/name"),
        Err(LanaiTrieError::InvalidInput { symbol: '/', position: 4, .. })
    ));
    assert!(trie.is_empty());
}

#[test]
fn test_heap_scenarios() {
    let mut heap = MolokaiHeap::heapify(vec![5, 3, 8, 1], HeapOrder::Min);
    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.pop(), Ok(3));
    assert_eq!(heap.pop(), Ok(5));
    assert_eq!(heap.pop(), Ok(8));
    assert_eq!(heap.pop(), Err(MolokaiHeapError::EmptyCollection));

    let mut heap = MolokaiHeap::new();
    heap.push(4);
    heap.push(2);
    heap.push(9);
    assert_eq!(heap.peek(), Ok(&2));
    assert_eq!(heap.pop(), Ok(2));
    heap.push(1);
    assert_eq!(heap.peek(), Ok(&1));
}

#[test]
fn test_priority_queue_of_jobs() {
    let mut queue: MolokaiHeap<PriorityEntry<u8, String>> = MolokaiHeap::new();
    queue.extend([
        PriorityEntry::new(3, "compact".to_string()),
        PriorityEntry::new(1, "flush".to_string()),
        PriorityEntry::new(2, "checkpoint".to_string()),
    ]);

    let order: Vec<String> = queue
        .into_sorted_vec()
        .into_iter()
        .map(|entry| entry.payload)
        .collect();
    assert_eq!(order, vec!["flush", "checkpoint", "compact"]);
}

#[test]
fn test_shared_handles_across_threads() {
    const THREAD_COUNT: usize = 4;

    let trie = SharedLanaiTrie::with_config(
        LanaiTrieConfig::new().with_alphabet(Alphabet::AsciiAlphanumeric),
    );
    let heap = SharedMolokaiHeap::with_order(HeapOrder::Max);
    let barrier = Arc::new(Barrier::new(THREAD_COUNT));

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let trie = trie.clone();
            let heap = heap.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..100 {
                    trie.insert(format!("t{thread_id}k{i}")).expect("valid key");
                    heap.push(thread_id * 100 + i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(trie.len(), THREAD_COUNT * 100);
    assert!(trie.starts_with("t3k9"));
    assert!(trie.remove("t0k0"));
    assert!(!trie.search("t0k0"));

    assert_eq!(heap.len(), THREAD_COUNT * 100);
    assert_eq!(heap.pop(), Ok(THREAD_COUNT * 100 - 1));
}
