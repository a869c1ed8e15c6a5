use crate::core::{Temporal, major_ticks};
use crate::error::{AxisError, AxisResult};

use super::{AxisSnapshot, TemporalAxis};

impl<T: Temporal> TemporalAxis<T> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> AxisSnapshot {
        let range = self.range();
        AxisSnapshot {
            kind: T::KIND.to_owned(),
            unit: self.unit(),
            base_label: self.tick_mark_label(&self.base()),
            title: self.title.clone(),
            config: self.config,
            state: self.state,
            data_extent: self.data_extent,
            range,
            major_ticks: major_ticks(range),
            minor_ticks: self.calculate_minor_tick_marks(),
            label_formatter_generation: self.label_formatter_generation,
            label_cache: self.label_cache_stats(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
