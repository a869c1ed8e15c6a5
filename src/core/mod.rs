pub mod auto_range;
pub mod coordinate;
pub mod label_format;
pub mod label_measure;
pub mod label_visibility;
pub mod position;
pub mod range;
pub mod temporal;
pub mod ticks;

pub use auto_range::{AutoRangeRequest, MAX_AUTO_RANGE_TICKS, auto_range};
pub use coordinate::{CoordinateMapper, to_coordinate, to_temporal};
pub use label_format::{IsoDateFormatter, IsoDateTimeFormatter, TickLabelFormatter};
pub use label_measure::{HeuristicLabelMeasurer, LabelExtent, TickLabelMeasurer, rotated_extent};
pub use label_visibility::{LabelWalk, visible_label_indices};
pub use position::{
    AxisOrientation, PositionMapper, calculate_scale, position_to_value, value_to_position,
};
pub use range::{
    AxisRange, AxisState, RANGE_ANIMATION_DURATION, RangeFrame, RangeTransition, SCALE_PRECISION,
};
pub use temporal::{Temporal, TemporalUnit};
pub use ticks::{MAX_MAJOR_TICKS, MAX_MINOR_TICKS, major_ticks, minor_ticks};
