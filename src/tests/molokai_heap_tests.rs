//! Tests for the Molokai binary heap.
//!
//! Property-based tests for heap ordering under heapify and under arbitrary
//! interleavings of push and pop.

use proptest::prelude::*;
use test_case::test_case;

use super::test_utils::{heap_ops_strategy, heap_values_strategy, HeapOp};
use crate::data_structures::molokai_heap::{
    largest_k, smallest_k, HeapOrder, MolokaiHeap, MolokaiHeapError, PriorityEntry,
};

proptest! {
    // Draining a heapified sequence yields it fully sorted, then EmptyCollection
    #[test]
    fn prop_heapify_drains_sorted(values in heap_values_strategy()) {
        let mut heap = MolokaiHeap::heapify(values.clone(), HeapOrder::Min);
        prop_assert!(heap.is_valid());

        let mut drained = Vec::with_capacity(values.len());
        while let Ok(value) = heap.pop() {
            drained.push(value);
        }

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
        prop_assert_eq!(heap.pop(), Err(MolokaiHeapError::EmptyCollection));
    }

    // A max-heap drains in descending order
    #[test]
    fn prop_max_heap_drains_descending(values in heap_values_strategy()) {
        let heap = MolokaiHeap::heapify(values.clone(), HeapOrder::Max);

        let mut expected = values;
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    // peek() before pop() returns the popped value, which is <= every other element
    #[test]
    fn prop_peek_matches_pop_under_interleaving(ops in heap_ops_strategy()) {
        let mut heap = MolokaiHeap::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                HeapOp::Push(value) => {
                    heap.push(value);
                    model.push(value);
                }
                HeapOp::Pop => {
                    let peeked = heap.peek().copied();
                    let popped = heap.pop();
                    prop_assert_eq!(peeked, popped);

                    match popped {
                        Ok(value) => {
                            prop_assert!(model.iter().all(|&other| value <= other));
                            let position = model.iter().position(|&other| other == value);
                            prop_assert!(position.is_some());
                            if let Some(position) = position {
                                model.swap_remove(position);
                            }
                        }
                        Err(err) => {
                            prop_assert_eq!(err, MolokaiHeapError::EmptyCollection);
                            prop_assert!(model.is_empty());
                        }
                    }
                }
            }
            prop_assert!(heap.is_valid());
            prop_assert_eq!(heap.len(), model.len());
        }
    }

    // push_pop and replace agree with their two-step equivalents
    #[test]
    fn prop_push_pop_and_replace(values in heap_values_strategy(), extra in -60i32..60) {
        let mut fused = MolokaiHeap::heapify(values.clone(), HeapOrder::Min);
        let mut stepwise = MolokaiHeap::heapify(values.clone(), HeapOrder::Min);

        let fused_out = fused.push_pop(extra);
        stepwise.push(extra);
        let stepwise_out = stepwise.pop();
        prop_assert_eq!(Ok::<i32, MolokaiHeapError>(fused_out), stepwise_out);
        prop_assert_eq!(fused.into_sorted_vec(), stepwise.into_sorted_vec());

        let mut replaced = MolokaiHeap::heapify(values.clone(), HeapOrder::Min);
        let mut expected = MolokaiHeap::heapify(values, HeapOrder::Min);
        let replaced_out = replaced.replace(extra);
        let expected_out = expected.pop();
        if expected_out.is_ok() {
            expected.push(extra);
        }
        prop_assert_eq!(replaced_out, expected_out);
        prop_assert_eq!(replaced.into_sorted_vec(), expected.into_sorted_vec());
    }

    // smallest_k / largest_k agree with sorting
    #[test]
    fn prop_bounded_selection(values in heap_values_strategy(), k in 0usize..20) {
        let mut ascending = values.clone();
        ascending.sort_unstable();
        let expected_small: Vec<i32> = ascending.iter().copied().take(k).collect();
        let expected_large: Vec<i32> = ascending.iter().rev().copied().take(k).collect();

        prop_assert_eq!(smallest_k(values.clone(), k), expected_small);
        prop_assert_eq!(largest_k(values, k), expected_large);
    }
}

#[test_case(HeapOrder::Min, vec![5, 3, 8, 1], vec![1, 3, 5, 8] ; "min heap")]
#[test_case(HeapOrder::Max, vec![5, 3, 8, 1], vec![8, 5, 3, 1] ; "max heap")]
#[test_case(HeapOrder::Min, vec![], vec![] ; "empty")]
#[test_case(HeapOrder::Max, vec![7, 7, 7], vec![7, 7, 7] ; "all equal")]
fn test_drain_order(order: HeapOrder, input: Vec<i32>, expected: Vec<i32>) {
    let heap = MolokaiHeap::heapify(input, order);
    assert_eq!(heap.into_sorted_vec(), expected);
}

#[test]
fn test_fifth_pop_is_empty_collection() {
    let mut heap = MolokaiHeap::heapify(vec![5, 3, 8, 1], HeapOrder::Min);
    for expected in [1, 3, 5, 8] {
        assert_eq!(heap.pop(), Ok(expected));
    }
    assert_eq!(heap.pop(), Err(MolokaiHeapError::EmptyCollection));
    assert_eq!(heap.peek(), Err(MolokaiHeapError::EmptyCollection));
}

#[test]
fn test_priority_payloads_need_not_be_ordered() {
    #[derive(Debug, PartialEq)]
    struct Task(&'static str);

    let mut heap = MolokaiHeap::with_order(HeapOrder::Max);
    heap.push(PriorityEntry::new(1, Task("sweep")));
    heap.push(PriorityEntry::new(9, Task("deploy")));
    heap.push(PriorityEntry::new(5, Task("review")));

    let first = heap.pop().expect("heap has entries");
    assert_eq!(first.priority, 9);
    assert_eq!(first.payload, Task("deploy"));
    assert_eq!(heap.peek().map(|entry| &entry.payload), Ok(&Task("review")));
}
