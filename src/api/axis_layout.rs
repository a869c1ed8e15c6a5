use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, LabelExtent};

/// One major tick produced by a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub coordinate: i64,
    pub position: f64,
    pub label: String,
    pub extent: LabelExtent,
    pub label_visible: bool,
}

/// Result of one layout pass over a track of `length` pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub length: f64,
    pub range: AxisRange,
    pub ticks: Vec<TickMark>,
    pub minor_positions: Vec<f64>,
}

impl AxisLayout {
    /// Ticks whose labels survived overlap filtering.
    pub fn visible_labels(&self) -> impl Iterator<Item = &TickMark> {
        self.ticks.iter().filter(|tick| tick.label_visible)
    }
}
