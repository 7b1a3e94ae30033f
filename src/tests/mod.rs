//! Crate-internal test suites.
//!
//! - Unit tests for configuration and error reporting
//! - Property-based tests for both collections using proptest
//! - Table-driven tests using test-case
//! - Shared fixtures and strategies in [`test_utils`]

pub mod molokai_heap_tests;

pub use test_utils::{
    create_test_dir, heap_ops_strategy, heap_values_strategy, key_list_strategy,
    lowercase_key_strategy, HeapOp, TestFixture,
};
