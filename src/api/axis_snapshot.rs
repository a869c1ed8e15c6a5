use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, AxisState, TemporalUnit};

use super::{AxisConfig, LabelCacheStats};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub kind: String,
    pub unit: TemporalUnit,
    /// Axis base rendered with the active label formatter.
    pub base_label: String,
    pub title: Option<String>,
    pub config: AxisConfig,
    pub state: AxisState,
    pub data_extent: Option<(i64, i64)>,
    pub range: AxisRange,
    pub major_ticks: Vec<i64>,
    pub minor_ticks: Vec<i64>,
    pub label_formatter_generation: u64,
    pub label_cache: LabelCacheStats,
}
