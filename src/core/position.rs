use serde::{Deserialize, Serialize};

use crate::core::range::AxisRange;

/// Primary direction of an axis track.
///
/// Vertical axes grow upward: their scale is negative and positions are
/// measured from the track end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AxisOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl AxisOrientation {
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }

    /// Display offset that pairs with the scale returned by [`calculate_scale`].
    #[must_use]
    pub fn display_offset(self, axis_length: f64) -> f64 {
        match self {
            Self::Horizontal => 0.0,
            Self::Vertical => axis_length,
        }
    }
}

/// Pixels per coordinate unit mapping `[lower_bound, upper_bound]` onto `length`.
///
/// An empty span maps one unit onto the whole length.
#[must_use]
pub fn calculate_scale(
    length: f64,
    lower_bound: i64,
    upper_bound: i64,
    orientation: AxisOrientation,
) -> f64 {
    let span = upper_bound as f64 - lower_bound as f64;
    let magnitude = if span == 0.0 { length } else { length / span };
    match orientation {
        AxisOrientation::Horizontal => magnitude,
        AxisOrientation::Vertical => -magnitude,
    }
}

/// `(value - lower_bound) * scale`, flipped to `axis_length - pos` when inverted.
#[must_use]
pub fn value_to_position(
    value: i64,
    lower_bound: i64,
    scale: f64,
    inverted: bool,
    axis_length: f64,
) -> f64 {
    let position = (value as f64 - lower_bound as f64) * scale;
    if inverted {
        axis_length - position
    } else {
        position
    }
}

/// Inverse of [`value_to_position`], truncated to a whole coordinate.
#[must_use]
pub fn position_to_value(
    position: f64,
    lower_bound: i64,
    scale: f64,
    inverted: bool,
    axis_length: f64,
) -> i64 {
    let position = if inverted {
        axis_length - position
    } else {
        position
    };
    truncate_coordinate(position / scale + lower_bound as f64)
}

/// Truncates toward zero, snapping values within float noise of an integer.
fn truncate_coordinate(raw: f64) -> i64 {
    let nearest = raw.round();
    if (raw - nearest).abs() <= 1e-9 * nearest.abs().max(1.0) {
        nearest as i64
    } else {
        raw.trunc() as i64
    }
}

/// Linear coordinate <-> pixel mapping for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionMapper {
    pub lower_bound: i64,
    pub upper_bound: i64,
    pub scale: f64,
    pub axis_length: f64,
    pub orientation: AxisOrientation,
    pub inverted: bool,
}

impl PositionMapper {
    #[must_use]
    pub fn new(range: AxisRange, axis_length: f64, orientation: AxisOrientation) -> Self {
        Self {
            lower_bound: range.lower_bound,
            upper_bound: range.upper_bound,
            scale: range.scale,
            axis_length,
            orientation,
            inverted: false,
        }
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn value_to_position(&self, value: i64) -> f64 {
        let offset = self.orientation.display_offset(self.axis_length);
        let position = offset + (value as f64 - self.lower_bound as f64) * self.scale;
        if self.inverted {
            self.axis_length - position
        } else {
            position
        }
    }

    #[must_use]
    pub fn position_to_value(&self, position: f64) -> i64 {
        let position = if self.inverted {
            self.axis_length - position
        } else {
            position
        };
        let offset = self.orientation.display_offset(self.axis_length);
        truncate_coordinate((position - offset) / self.scale + self.lower_bound as f64)
    }

    /// Pixel position of coordinate zero, or NaN when zero is off the axis.
    #[must_use]
    pub fn zero_position(&self) -> f64 {
        if 0 < self.lower_bound || 0 > self.upper_bound {
            return f64::NAN;
        }
        self.value_to_position(0)
    }

    #[must_use]
    pub fn is_value_on_axis(&self, value: i64) -> bool {
        self.lower_bound <= value && value <= self.upper_bound
    }

    /// Returns `true` when positions grow with the coordinate value.
    #[must_use]
    pub fn positions_ascend(&self) -> bool {
        (self.scale >= 0.0) != self.inverted
    }
}
