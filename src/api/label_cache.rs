use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::TickLabelFormatter;

/// Shared handle to a caller-supplied tick label formatter.
pub type TickLabelFormatterRef<T> = Arc<dyn TickLabelFormatter<T>>;

/// Runtime metrics exposed by the in-axis tick label cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Formatted label text keyed by coordinate.
///
/// Auto-ranging measures the same candidate ticks on several iterations, so
/// labels are formatted once per formatter generation.
#[derive(Debug, Default)]
pub(super) struct TickLabelCache {
    entries: HashMap<i64, String>,
    hits: u64,
    misses: u64,
}

impl TickLabelCache {
    const MAX_ENTRIES: usize = 8192;

    pub(super) fn get(&mut self, coordinate: i64) -> Option<String> {
        let value = self.entries.get(&coordinate).cloned();
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert(&mut self, coordinate: i64, value: String) {
        self.misses = self.misses.saturating_add(1);
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.clear();
        }
        self.entries.insert(coordinate, value);
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> LabelCacheStats {
        LabelCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}
