use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::label_measure::LabelExtent;
use crate::core::position::{AxisOrientation, calculate_scale};
use crate::core::range::AxisRange;
use crate::core::ticks::MAX_MAJOR_TICKS;
use crate::error::{AxisError, AxisResult};

/// Upper limit on the number of major ticks an auto-ranged axis may carry.
pub const MAX_AUTO_RANGE_TICKS: i64 = 20;

/// Inputs of one auto-range pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoRangeRequest {
    pub min_value: i64,
    pub max_value: i64,
    /// Available track length in pixels.
    pub length: f64,
    /// Approximate average label size along the axis.
    pub avg_label_size: f64,
    pub orientation: AxisOrientation,
    pub tick_label_gap: f64,
    pub tick_label_rotation: f64,
}

impl AutoRangeRequest {
    #[must_use]
    pub fn new(min_value: i64, max_value: i64, length: f64, avg_label_size: f64) -> Self {
        Self {
            min_value,
            max_value,
            length,
            avg_label_size,
            orientation: AxisOrientation::Horizontal,
            tick_label_gap: 3.0,
            tick_label_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: AxisOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_tick_label_gap(mut self, gap: f64) -> Self {
        self.tick_label_gap = gap;
        self
    }

    #[must_use]
    pub fn with_tick_label_rotation(mut self, rotation_deg: f64) -> Self {
        self.tick_label_rotation = rotation_deg;
        self
    }

    fn validate(self) -> AxisResult<Self> {
        if !self.length.is_finite()
            || self.length <= 0.0
            || !self.avg_label_size.is_finite()
            || self.avg_label_size <= 0.0
        {
            return Err(AxisError::InvalidAutoRangeInput {
                length: self.length,
                label_size: self.avg_label_size,
            });
        }
        if !self.tick_label_gap.is_finite() || self.tick_label_gap < 0.0 {
            return Err(AxisError::InvalidData(
                "tick label gap must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Searches for a tick unit and unit-aligned bounds that fit `request.length`.
///
/// Bounds are padded, snapped outward to multiples of the tick unit, and the
/// unit grows until every label fits (`(count - 1) * widest_label_gap <=
/// length`) and at most [`MAX_AUTO_RANGE_TICKS`] ticks remain. The unit
/// strictly grows on each retry and is capped where the tick count bottoms
/// out (2 ticks, or 3 when the padded extent straddles zero), so the search
/// terminates. When labels are too wide even for that minimum, the minimal
/// range is returned as a best effort and a warning is logged.
///
/// `measure` receives each candidate tick coordinate and the label rotation.
pub fn auto_range<F>(request: AutoRangeRequest, mut measure: F) -> AxisResult<AxisRange>
where
    F: FnMut(i64, f64) -> AxisResult<LabelExtent>,
{
    let request = request.validate()?;
    let (min_value, max_value) = if request.min_value <= request.max_value {
        (request.min_value, request.max_value)
    } else {
        (request.max_value, request.min_value)
    };

    let span = max_value.checked_sub(min_value).ok_or_else(overflow)?;
    let padding = if span < 100 {
        1
    } else {
        (span as f64 * 0.01) as i64
    };
    let padded_min = min_value.checked_sub(padding).ok_or_else(overflow)?;
    let padded_max = max_value.checked_add(padding).ok_or_else(overflow)?;
    let padded_span = padded_max.checked_sub(padded_min).ok_or_else(overflow)?;

    // No unit above `max_unit` lowers the tick count any further.
    let max_unit = i64::try_from(padded_min.unsigned_abs().max(padded_max.unsigned_abs()))
        .unwrap_or(i64::MAX)
        .max(1);
    let min_tick_count = if padded_min < 0 && padded_max > 0 { 3 } else { 2 };

    let target_tick_count = ((request.length / request.avg_label_size).floor() as i64).max(2);
    let mut tick_unit = (padded_span / target_tick_count).max(1);
    let mut iterations = 0u32;

    let (min_rounded, max_rounded) = loop {
        iterations += 1;
        let min_rounded = floor_to_multiple(padded_min, tick_unit)?;
        let max_rounded = ceil_to_multiple(padded_max, tick_unit)?;
        let rounded_span = max_rounded.checked_sub(min_rounded).ok_or_else(overflow)?;
        let count = rounded_span / tick_unit + 1;

        if count > MAX_MAJOR_TICKS {
            // Far too dense to be worth measuring.
            tick_unit = unit_for_tick_limit(tick_unit, rounded_span)?.min(max_unit);
            continue;
        }

        let mut widest = OrderedFloat(0.0_f64);
        for index in 0..count {
            let tick = min_rounded + index * tick_unit;
            let extent = measure(tick, request.tick_label_rotation)?;
            if !extent.is_finite() {
                return Err(AxisError::InvalidData(format!(
                    "label extent for tick {tick} must be finite"
                )));
            }
            let size = if request.orientation.is_vertical() {
                extent.height
            } else {
                extent.width
            };
            widest = widest.max(OrderedFloat(size + request.tick_label_gap));
        }
        let max_gap = widest.into_inner().floor();
        let required_length = (count - 1) as f64 * max_gap;

        if required_length <= request.length && count <= MAX_AUTO_RANGE_TICKS {
            break (min_rounded, max_rounded);
        }
        if count <= min_tick_count {
            warn!(
                tick_unit,
                count,
                required_length,
                length = request.length,
                "tick labels overflow the axis even at the minimum tick count"
            );
            break (min_rounded, max_rounded);
        }

        let candidate = ((tick_unit as f64 * required_length / request.length).floor() as i64)
            .saturating_add(1);
        let next = if candidate > tick_unit {
            candidate
        } else if count > MAX_AUTO_RANGE_TICKS {
            unit_for_tick_limit(tick_unit, rounded_span)?
        } else {
            tick_unit.checked_add(1).ok_or_else(overflow)?
        }
        .min(max_unit);
        trace!(
            iteration = iterations,
            tick_unit,
            next_tick_unit = next,
            count,
            required_length,
            "auto-range retry"
        );
        tick_unit = next;
    };

    let scale = calculate_scale(
        request.length,
        min_rounded,
        max_rounded,
        request.orientation,
    );
    debug!(
        lower_bound = min_rounded,
        upper_bound = max_rounded,
        tick_unit,
        scale,
        iterations,
        "auto-range converged"
    );
    Ok(AxisRange::new(min_rounded, max_rounded, tick_unit, scale))
}

fn overflow() -> AxisError {
    AxisError::InvalidData("auto-range bounds overflow the coordinate space".to_owned())
}

/// Smallest unit above `tick_unit` that could fit `span` in the tick limit.
fn unit_for_tick_limit(tick_unit: i64, span: i64) -> AxisResult<i64> {
    let intervals = MAX_AUTO_RANGE_TICKS - 1;
    let needed = span / intervals + i64::from(span % intervals != 0);
    Ok(tick_unit.checked_add(1).ok_or_else(overflow)?.max(needed))
}

fn floor_to_multiple(value: i64, unit: i64) -> AxisResult<i64> {
    value
        .div_euclid(unit)
        .checked_mul(unit)
        .ok_or_else(overflow)
}

fn ceil_to_multiple(value: i64, unit: i64) -> AxisResult<i64> {
    let quotient = value.div_euclid(unit) + i64::from(value.rem_euclid(unit) != 0);
    quotient.checked_mul(unit).ok_or_else(overflow)
}
