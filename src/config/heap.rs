//! Heap configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::molokai_heap::{HeapOrder, MolokaiHeapConfig};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest preallocation accepted from configuration.
const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Heap configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct HeapSettings {
    /// Ordering direction (`min` or `max`)
    pub order: HeapOrder,

    /// Number of elements to reserve space for up front
    pub initial_capacity: usize,
}

impl HeapSettings {
    /// Converts the settings into a heap configuration.
    pub fn to_heap_config(&self) -> MolokaiHeapConfig {
        MolokaiHeapConfig::new()
            .with_order(self.order)
            .with_initial_capacity(self.initial_capacity)
    }
}

impl Validate for HeapSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::invalid(
                "heap.initial_capacity",
                format!("must not exceed {MAX_INITIAL_CAPACITY}"),
            ));
        }

        Ok(())
    }
}
