use crate::core::{LabelExtent, Temporal, TickLabelFormatter};
use crate::error::AxisResult;

use super::label_cache::{LabelCacheStats, TickLabelFormatterRef};
use super::TemporalAxis;

impl<T: Temporal> TemporalAxis<T> {
    pub fn to_coordinate(&self, value: T) -> AxisResult<i64> {
        self.mapper.to_coordinate(value)
    }

    pub fn to_temporal(&self, coordinate: i64) -> AxisResult<T> {
        self.mapper.to_temporal(coordinate)
    }

    /// Parses label text with the reference formatter, then maps it to a coordinate.
    pub fn parse(&self, text: &str) -> AxisResult<i64> {
        let value = self.default_formatter.parse(text)?;
        self.to_coordinate(value)
    }

    /// Label text for `value`, using the custom formatter when one is set.
    #[must_use]
    pub fn tick_mark_label(&self, value: &T) -> String {
        match &self.label_formatter {
            Some(formatter) => formatter.format(value),
            None => self.default_formatter.format(value),
        }
    }

    pub fn tick_mark_label_for_coordinate(&self, coordinate: i64) -> AxisResult<String> {
        if let Some(cached) = self.label_cache.borrow_mut().get(coordinate) {
            return Ok(cached);
        }
        let label = self.tick_mark_label(&self.to_temporal(coordinate)?);
        self.label_cache
            .borrow_mut()
            .insert(coordinate, label.clone());
        Ok(label)
    }

    /// Rendered extent of the label at `coordinate` under `rotation_deg`.
    pub fn measure_tick_mark(&self, coordinate: i64, rotation_deg: f64) -> AxisResult<LabelExtent> {
        let label = self.tick_mark_label_for_coordinate(coordinate)?;
        Ok(self.label_measurer.measure(&label, rotation_deg))
    }

    pub fn set_label_formatter(&mut self, formatter: TickLabelFormatterRef<T>) {
        self.label_formatter = Some(formatter);
        self.on_label_formatter_changed();
    }

    pub fn clear_label_formatter(&mut self) {
        self.label_formatter = None;
        self.on_label_formatter_changed();
    }

    #[must_use]
    pub fn label_formatter_generation(&self) -> u64 {
        self.label_formatter_generation
    }

    #[must_use]
    pub fn label_cache_stats(&self) -> LabelCacheStats {
        self.label_cache.borrow().stats()
    }

    fn on_label_formatter_changed(&mut self) {
        self.label_formatter_generation = self.label_formatter_generation.saturating_add(1);
        self.label_cache.get_mut().clear();
        self.invalidate_range_only();
    }
}
