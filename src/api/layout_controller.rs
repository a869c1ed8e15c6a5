use tracing::trace;

use crate::core::{
    LabelWalk, PositionMapper, Temporal, calculate_scale, major_ticks, visible_label_indices,
};
use crate::error::{AxisError, AxisResult};

use super::{AxisLayout, TemporalAxis, TickMark};

impl<T: Temporal> TemporalAxis<T> {
    /// Recomputes scale and track offset for a track of `length` pixels.
    pub fn calculate_new_scale(&mut self, length: f64) -> AxisResult<()> {
        validate_length(length)?;
        self.state.offset = length;
        self.state.scale = calculate_scale(
            length,
            self.state.lower_bound,
            self.state.upper_bound,
            self.config.orientation,
        );
        Ok(())
    }

    #[must_use]
    pub fn position_mapper(&self) -> PositionMapper {
        PositionMapper {
            lower_bound: self.state.lower_bound,
            upper_bound: self.state.upper_bound,
            scale: self.state.scale,
            axis_length: self.state.offset,
            orientation: self.config.orientation,
            inverted: self.state.inverted,
        }
    }

    /// Pixel position of `value` along the track.
    #[must_use]
    pub fn display_position(&self, value: i64) -> f64 {
        self.position_mapper().value_to_position(value)
    }

    /// Coordinate at pixel `position`, truncated to a whole unit.
    #[must_use]
    pub fn value_for_display(&self, position: f64) -> i64 {
        self.position_mapper().position_to_value(position)
    }

    pub fn display_position_of(&self, value: T) -> AxisResult<f64> {
        Ok(self.display_position(self.to_coordinate(value)?))
    }

    /// Position of coordinate zero (the axis base), or NaN when it is off the axis.
    #[must_use]
    pub fn zero_position(&self) -> f64 {
        self.position_mapper().zero_position()
    }

    #[must_use]
    pub fn is_value_on_axis(&self, value: i64) -> bool {
        self.position_mapper().is_value_on_axis(value)
    }

    #[must_use]
    pub fn to_numeric_value(&self, value: i64) -> f64 {
        value as f64
    }

    /// Reverses the pixel direction of the axis.
    pub fn invert(&mut self) {
        self.set_inverted(!self.state.inverted);
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        if self.state.inverted == inverted {
            return;
        }
        self.state.inverted = inverted;
        self.config.inverted = inverted;
        self.invalidate_range_only();
    }

    /// Runs one layout pass over a track of `length` pixels.
    ///
    /// Auto-ranges first when the range was invalidated, then recomputes the
    /// scale, places major and minor ticks, and hides labels that would
    /// overlap a previously kept label.
    pub fn layout(&mut self, length: f64) -> AxisResult<AxisLayout> {
        validate_length(length)?;
        self.refresh_range(length)?;
        self.calculate_new_scale(length)?;
        self.range_valid = true;

        let range = self.range();
        let mapper = self.position_mapper();
        let rotation = self.config.tick_label_rotation;
        let vertical = self.config.orientation.is_vertical();

        let mut ticks = Vec::new();
        for coordinate in major_ticks(range) {
            let extent = self.measure_tick_mark(coordinate, rotation)?;
            ticks.push(TickMark {
                coordinate,
                position: mapper.value_to_position(coordinate),
                label: self.tick_mark_label_for_coordinate(coordinate)?,
                extent,
                label_visible: false,
            });
        }

        let positions: Vec<f64> = ticks.iter().map(|tick| tick.position).collect();
        let extents: Vec<f64> = ticks
            .iter()
            .map(|tick| {
                if vertical {
                    tick.extent.height
                } else {
                    tick.extent.width
                }
            })
            .collect();
        let walk = if mapper.positions_ascend() {
            LabelWalk::Ascending
        } else {
            LabelWalk::Descending
        };
        for index in visible_label_indices(
            &positions,
            &extents,
            self.config.tick_label_gap,
            length,
            walk,
        )? {
            ticks[index].label_visible = true;
        }

        let minor_positions = self
            .calculate_minor_tick_marks()
            .into_iter()
            .map(|coordinate| mapper.value_to_position(coordinate))
            .collect();

        self.pending_invalidation = Default::default();
        trace!(
            length,
            ticks = ticks.len(),
            inverted = self.state.inverted,
            "axis layout pass"
        );
        Ok(AxisLayout {
            length,
            range,
            ticks,
            minor_positions,
        })
    }
}

fn validate_length(length: f64) -> AxisResult<()> {
    if !length.is_finite() || length <= 0.0 {
        return Err(AxisError::InvalidData(
            "axis length must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
