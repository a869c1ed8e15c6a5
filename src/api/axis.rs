use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::core::{
    AxisOrientation, AxisState, CoordinateMapper, HeuristicLabelMeasurer, RangeTransition,
    Temporal, TemporalUnit, TickLabelMeasurer,
};
use crate::error::AxisResult;

use super::label_cache::{TickLabelCache, TickLabelFormatterRef};
use super::{AxisConfig, AxisInvalidation, RelayoutCallback};

/// Stateful temporal axis consumed by a host layout pass.
///
/// `TemporalAxis` owns the axis state (bounds, tick unit, scale, inversion,
/// track length) and routes every computation through the pure functions in
/// [`crate::core`]. Setters record an [`AxisInvalidation`] and notify the
/// optional relayout callback; they never lay out eagerly.
pub struct TemporalAxis<T: Temporal> {
    pub(super) mapper: CoordinateMapper<T>,
    pub(super) config: AxisConfig,
    pub(super) state: AxisState,
    pub(super) title: Option<String>,
    pub(super) data_extent: Option<(i64, i64)>,
    pub(super) range_valid: bool,
    pub(super) default_formatter: T::Formatter,
    pub(super) label_formatter: Option<TickLabelFormatterRef<T>>,
    pub(super) label_formatter_generation: u64,
    pub(super) label_cache: RefCell<TickLabelCache>,
    pub(super) label_measurer: Arc<dyn TickLabelMeasurer>,
    pub(super) pending_transition: Option<RangeTransition>,
    pub(super) pending_invalidation: AxisInvalidation,
    pub(super) relayout_callback: Option<RelayoutCallback>,
}

impl<T: Temporal> TemporalAxis<T> {
    /// Creates an auto-ranging axis whose coordinates count `unit`s from `base`.
    #[must_use]
    pub fn new(base: T, unit: TemporalUnit) -> Self {
        Self::build(base, unit, AxisConfig::default(), AxisState::default())
    }

    /// Creates an auto-ranging axis with explicit configuration.
    pub fn with_config(base: T, unit: TemporalUnit, config: AxisConfig) -> AxisResult<Self> {
        let config = config.validate()?;
        let state = AxisState {
            inverted: config.inverted,
            ..AxisState::default()
        };
        Ok(Self::build(base, unit, config, state))
    }

    /// Creates a fixed-range axis spanning `lower..=upper`.
    ///
    /// `lower` becomes the coordinate base, so the lower bound is always `0`.
    pub fn with_bounds(lower: T, upper: T, tick_unit: i64, unit: TemporalUnit) -> AxisResult<Self> {
        let mapper = CoordinateMapper::new(lower, unit);
        let upper_bound = mapper.to_coordinate(upper)?;
        let state = AxisState {
            lower_bound: 0,
            upper_bound,
            tick_unit,
            ..AxisState::default()
        };
        let config = AxisConfig::default().with_auto_ranging(false);
        Ok(Self::build(lower, unit, config, state))
    }

    fn build(base: T, unit: TemporalUnit, config: AxisConfig, state: AxisState) -> Self {
        debug!(kind = T::KIND, ?unit, auto_ranging = config.auto_ranging, "create temporal axis");
        Self {
            mapper: CoordinateMapper::new(base, unit),
            state,
            title: None,
            data_extent: None,
            range_valid: !config.auto_ranging,
            default_formatter: T::Formatter::default(),
            label_formatter: None,
            label_formatter_generation: 0,
            label_cache: RefCell::new(TickLabelCache::default()),
            label_measurer: Arc::new(HeuristicLabelMeasurer::for_font_size(
                config.tick_label_font_size,
            )),
            pending_transition: None,
            pending_invalidation: AxisInvalidation::None,
            relayout_callback: None,
            config,
        }
    }

    /// Sets the axis title shown by the host next to the track.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
        self.request_layout();
    }

    #[must_use]
    pub fn base(&self) -> T {
        self.mapper.base()
    }

    #[must_use]
    pub fn unit(&self) -> TemporalUnit {
        self.mapper.unit()
    }

    #[must_use]
    pub fn config(&self) -> AxisConfig {
        self.config
    }

    #[must_use]
    pub fn state(&self) -> AxisState {
        self.state
    }

    #[must_use]
    pub fn lower_bound(&self) -> i64 {
        self.state.lower_bound
    }

    #[must_use]
    pub fn upper_bound(&self) -> i64 {
        self.state.upper_bound
    }

    #[must_use]
    pub fn tick_unit(&self) -> i64 {
        self.state.tick_unit
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.config.orientation
    }

    #[must_use]
    pub fn is_auto_ranging(&self) -> bool {
        self.config.auto_ranging
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.state.inverted
    }

    /// Sets the tick unit; on a fixed-range axis this also invalidates the range.
    pub fn set_tick_unit(&mut self, tick_unit: i64) {
        self.state.tick_unit = tick_unit;
        if !self.config.auto_ranging {
            self.invalidate_range_only();
        }
    }

    pub fn set_lower_bound(&mut self, lower_bound: i64) {
        self.state.lower_bound = lower_bound;
        self.invalidate_range_only();
    }

    pub fn set_upper_bound(&mut self, upper_bound: i64) {
        self.state.upper_bound = upper_bound;
        self.invalidate_range_only();
    }

    pub fn set_auto_ranging(&mut self, auto_ranging: bool) {
        if self.config.auto_ranging == auto_ranging {
            return;
        }
        self.config.auto_ranging = auto_ranging;
        self.invalidate_range_only();
    }

    pub fn set_orientation(&mut self, orientation: AxisOrientation) {
        if self.config.orientation == orientation {
            return;
        }
        self.config.orientation = orientation;
        self.invalidate_range_only();
    }

    pub fn set_animated(&mut self, animated: bool) {
        self.config.animated = animated;
    }

    pub fn set_minor_tick_count(&mut self, count: u32) {
        self.config.minor_tick_count = count;
        self.request_layout();
    }

    pub fn set_tick_label_gap(&mut self, gap: f64) -> AxisResult<()> {
        self.config = self.config.with_tick_label_gap(gap).validate()?;
        self.invalidate_range_only();
        Ok(())
    }

    pub fn set_tick_label_rotation(&mut self, rotation_deg: f64) -> AxisResult<()> {
        self.config = self.config.with_tick_label_rotation(rotation_deg).validate()?;
        self.invalidate_range_only();
        Ok(())
    }

    /// Replaces the text measurement backend used for labels.
    pub fn set_label_measurer(&mut self, measurer: Arc<dyn TickLabelMeasurer>) {
        self.label_measurer = measurer;
        self.invalidate_range_only();
    }
}

impl<T: Temporal> fmt::Debug for TemporalAxis<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporalAxis")
            .field("mapper", &self.mapper)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("title", &self.title)
            .field("data_extent", &self.data_extent)
            .field("range_valid", &self.range_valid)
            .field("label_formatter", &self.label_formatter)
            .field("pending_invalidation", &self.pending_invalidation)
            .finish_non_exhaustive()
    }
}
