use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Direction in which tick positions move while walking ticks in value order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelWalk {
    /// Positions grow from `0` toward `axis_length`.
    Ascending,
    /// Positions shrink from `axis_length` toward `0`.
    Descending,
}

/// Indices of tick labels that can be drawn without overlapping.
///
/// Ticks are walked in the given order. A label is kept only when its
/// position clears the previously kept label's extent plus `gap`; labels
/// positioned outside `[0, axis_length]` are never kept. `extents` are the
/// label sizes along the axis direction.
pub fn visible_label_indices(
    positions: &[f64],
    extents: &[f64],
    gap: f64,
    axis_length: f64,
    walk: LabelWalk,
) -> AxisResult<Vec<usize>> {
    if positions.len() != extents.len() {
        return Err(AxisError::InvalidData(format!(
            "label positions ({}) and extents ({}) must have the same length",
            positions.len(),
            extents.len()
        )));
    }
    if !gap.is_finite() || gap < 0.0 {
        return Err(AxisError::InvalidData(
            "label gap must be finite and >= 0".to_owned(),
        ));
    }

    let mut visible = Vec::with_capacity(positions.len());
    let mut prev_end = match walk {
        LabelWalk::Ascending => -gap,
        LabelWalk::Descending => axis_length + gap,
    };

    for (index, (&position, &extent)) in positions.iter().zip(extents).enumerate() {
        if !position.is_finite() || position < 0.0 || position > axis_length {
            continue;
        }
        let clears = match walk {
            LabelWalk::Ascending => position > prev_end,
            LabelWalk::Descending => position < prev_end,
        };
        if !clears {
            continue;
        }
        visible.push(index);
        prev_end = match walk {
            LabelWalk::Ascending => position + extent + gap,
            LabelWalk::Descending => position - (extent + gap),
        };
    }

    Ok(visible)
}
