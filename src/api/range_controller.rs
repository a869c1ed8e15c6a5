use tracing::{debug, trace};

use crate::core::{
    AutoRangeRequest, AxisRange, RangeTransition, Temporal, auto_range, major_ticks, minor_ticks,
};
use crate::error::{AxisError, AxisResult};

use super::TemporalAxis;

impl<T: Temporal> TemporalAxis<T> {
    /// Current bounds, tick unit and scale as an immutable range.
    #[must_use]
    pub fn range(&self) -> AxisRange {
        self.state.range()
    }

    /// Replaces the axis range.
    ///
    /// With `animate` the state still jumps to `range` immediately; the
    /// interpolation from the previous range is exposed through
    /// [`Self::take_range_transition`] for the host to play back.
    pub fn set_range(&mut self, range: AxisRange, animate: bool) {
        let previous = self.state.range();
        self.state.apply_range(range);
        self.range_valid = true;
        self.pending_transition = if animate && previous != range {
            Some(RangeTransition::new(previous, range))
        } else {
            None
        };
        debug!(
            lower_bound = range.lower_bound,
            upper_bound = range.upper_bound,
            tick_unit = range.tick_unit,
            scale = range.scale,
            animate,
            "set axis range"
        );
        self.request_layout();
    }

    /// Takes the transition recorded by the last animated `set_range`.
    pub fn take_range_transition(&mut self) -> Option<RangeTransition> {
        self.pending_transition.take()
    }

    /// Major tick coordinates for `range`.
    ///
    /// `length` is accepted for parity with layout callers; tick placement only
    /// depends on the range.
    #[must_use]
    pub fn calculate_tick_values(&self, length: f64, range: &AxisRange) -> Vec<i64> {
        trace!(length, "calculate tick values");
        major_ticks(*range)
    }

    /// Minor tick coordinates for the current axis state.
    #[must_use]
    pub fn calculate_minor_tick_marks(&self) -> Vec<i64> {
        minor_ticks(
            self.state.lower_bound,
            self.state.upper_bound,
            self.state.tick_unit,
            self.config.minor_tick_count,
        )
    }

    /// Computes a range covering `min_value..=max_value` on a track of `length`
    /// pixels, measuring candidate tick labels with the axis formatter and
    /// measurer.
    pub fn auto_range(
        &self,
        min_value: i64,
        max_value: i64,
        length: f64,
        label_size: f64,
    ) -> AxisResult<AxisRange> {
        let request = AutoRangeRequest::new(min_value, max_value, length, label_size)
            .with_orientation(self.config.orientation)
            .with_tick_label_gap(self.config.tick_label_gap)
            .with_tick_label_rotation(self.config.tick_label_rotation);
        auto_range(request, |tick, rotation| {
            self.measure_tick_mark(tick, rotation)
        })
    }

    /// Records the data extent the next auto-range pass must cover.
    pub fn invalidate_range(&mut self, data: &[i64]) {
        let extent = data
            .iter()
            .fold(None, |acc: Option<(i64, i64)>, &value| match acc {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            });
        self.data_extent = extent;
        self.invalidate_range_only();
    }

    /// Records the extent of temporal data values.
    pub fn invalidate_range_with_values(&mut self, values: &[T]) -> AxisResult<()> {
        let coordinates = values
            .iter()
            .map(|value| self.to_coordinate(*value))
            .collect::<AxisResult<Vec<_>>>()?;
        self.invalidate_range(&coordinates);
        Ok(())
    }

    #[must_use]
    pub fn data_extent(&self) -> Option<(i64, i64)> {
        self.data_extent
    }

    #[must_use]
    pub fn is_range_valid(&self) -> bool {
        self.range_valid
    }

    /// Re-ranges from the recorded data extent when auto-ranging is enabled.
    ///
    /// Returns `Ok(None)` when there is nothing to do.
    pub fn refresh_range(&mut self, length: f64) -> AxisResult<Option<AxisRange>> {
        if self.range_valid || !self.config.auto_ranging {
            return Ok(None);
        }
        let Some((min_value, max_value)) = self.data_extent else {
            return Ok(None);
        };
        if !length.is_finite() || length <= 0.0 {
            return Err(AxisError::InvalidAutoRangeInput {
                length,
                label_size: self.config.average_label_size(),
            });
        }
        let range = self.auto_range(
            min_value,
            max_value,
            length,
            self.config.average_label_size(),
        )?;
        self.set_range(range, self.config.animated);
        Ok(Some(range))
    }
}
