//! Prefix Heap Library
//!
//! Two independent in-memory collections and the ambient plumbing around
//! them:
//!
//! - [`data_structures::lanai_trie`]: a prefix tree over a configurable
//!   alphabet with key, prefix and longest-prefix queries
//! - [`data_structures::molokai_heap`]: a binary heap priority queue whose
//!   ordering direction is chosen at construction
//! - [`data_structures::sync`]: lock-guarded handles for sharing either
//!   structure between threads
//!
//! Both structures are single-threaded and synchronous; every operation
//! either completes and leaves the structure valid or fails without
//! touching it.

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Routes reported errors through `tracing` and installs the global
/// configuration from the default location.
pub fn init() -> error::PrefixHeapResult<()> {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
    config::init_default_config()?;
    Ok(())
}
